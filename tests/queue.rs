use bidi_paths::queue::IndexedMinPriorityQueue;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn get_small_queue() -> IndexedMinPriorityQueue<String> {
    let mut queue = IndexedMinPriorityQueue::new();
    for (item, priority) in [
        ("cse", 12.3),
        ("332", 33.2),
        ("minpq", -5.67),
        ("assignment", -0.234),
        ("tests", 100.0),
        ("!", -5.66),
    ] {
        assert!(queue.add(item.to_string(), priority));
    }
    queue
}

#[test]
fn add_rejects_duplicates() {
    let mut queue = get_small_queue();

    for (item, priority) in [("cse", 12.3), ("332", -1000.0), ("!", 0.0)] {
        assert!(!queue.add(item.to_string(), priority));
    }

    assert_eq!(queue.len(), 6);
    assert_eq!(queue.priority(&"332".to_string()), Some(33.2));
    assert_eq!(queue.priority(&"!".to_string()), Some(-5.66));
    assert_eq!(queue.peek_smallest().map(String::as_str), Some("minpq"));
}

#[test]
fn contains_follows_add_and_remove() {
    let mut queue = get_small_queue();

    for item in ["cse", "332", "minpq", "assignment", "tests", "!"] {
        assert!(queue.contains(&item.to_string()));
    }
    assert!(!queue.contains(&"missing".to_string()));

    assert_eq!(queue.remove_smallest().as_deref(), Some("minpq"));
    assert!(!queue.contains(&"minpq".to_string()));
}

#[test]
fn change_priority_reorders() {
    let mut queue = get_small_queue();
    assert_eq!(queue.peek_smallest().map(String::as_str), Some("minpq"));

    assert!(queue.change_priority(&"cse".to_string(), -12.3));
    assert_eq!(queue.peek_smallest().map(String::as_str), Some("cse"));

    assert!(queue.change_priority(&"!".to_string(), -50.66));
    assert_eq!(queue.peek_smallest().map(String::as_str), Some("!"));

    assert!(!queue.change_priority(&"missing".to_string(), 0.0));
    assert_eq!(queue.len(), 6);

    let expected = ["!", "cse", "minpq", "assignment", "332", "tests"];
    for (removed, item) in expected.iter().enumerate() {
        assert_eq!(queue.remove_smallest().as_deref(), Some(*item));
        assert!(!queue.contains(&item.to_string()));
        assert_eq!(queue.len(), expected.len() - removed - 1);
    }

    assert!(queue.is_empty());
    assert_eq!(queue.peek_smallest(), None);
}

#[test]
fn remove_from_empty_queue() {
    let mut queue: IndexedMinPriorityQueue<u32> = IndexedMinPriorityQueue::new();
    for _ in 0..3 {
        assert_eq!(queue.remove_smallest(), None);
        assert!(queue.is_empty());
    }
    assert!(!queue.change_priority(&1, 1.0));
}

#[test]
fn extraction_is_sorted() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let mut queue = IndexedMinPriorityQueue::new();
        let number_of_items = rng.gen_range(0..300u32);
        for item in 0..number_of_items {
            // Few distinct priorities to get plenty of ties.
            queue.add(item, rng.gen_range(0..20) as f64);
        }

        let mut removed = Vec::new();
        let mut last_priority = f64::NEG_INFINITY;
        while let Some(item) = queue.peek_smallest().copied() {
            let priority = queue.priority(&item).unwrap();
            assert!(priority >= last_priority);
            last_priority = priority;
            assert_eq!(queue.remove_smallest(), Some(item));
            removed.push(item);
        }

        removed.sort_unstable();
        assert_eq!(removed, (0..number_of_items).collect::<Vec<_>>());
    }
}

#[test]
fn changed_priorities_match_fresh_queue() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let mut priorities: Vec<f64> = (0..100).map(|_| rng.gen_range(0.0..1000.0)).collect();
        let mut queue = IndexedMinPriorityQueue::new();
        for (item, priority) in priorities.iter().enumerate() {
            queue.add(item, *priority);
        }

        for _ in 0..200 {
            let item = rng.gen_range(0..priorities.len());
            let priority = rng.gen_range(0.0..1000.0);
            priorities[item] = priority;
            assert!(queue.change_priority(&item, priority));
        }

        let mut fresh = IndexedMinPriorityQueue::new();
        for (item, priority) in priorities.iter().enumerate() {
            fresh.add(item, *priority);
        }

        while let Some(item) = queue.remove_smallest() {
            let fresh_item = fresh.remove_smallest().unwrap();
            assert_eq!(priorities[item], priorities[fresh_item]);
        }
        assert!(fresh.is_empty());
    }
}
