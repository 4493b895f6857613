pub mod indexed_min_priority_queue;

pub use indexed_min_priority_queue::IndexedMinPriorityQueue;
