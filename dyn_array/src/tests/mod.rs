use super::*;
use crossbeam::scope;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn filled(n: i32) -> DynamicArray<i32> {
    (0..n).collect()
}

#[test]
fn test_add_element() {
    let mut v = DynamicArray::new();
    assert!(v.add(1));
    assert_eq!(v.size(), 1);
    assert_eq!(v.get(0), Ok(&1));
}

#[test]
fn test_add_multiple_elements() {
    let mut v = DynamicArray::new();
    for i in 0..15 {
        v.add(i);
    }
    assert_eq!(v.size(), 15);
    for i in 0..15 {
        assert_eq!(*v.get(i).unwrap(), i);
    }
}

#[test]
fn test_add_then_get_last() {
    let mut v = filled(7);
    v.add(42);
    assert_eq!(v.get(v.size() - 1), Ok(&42));
}

#[test]
fn test_growth_sequence() {
    let mut v = DynamicArray::new();
    assert_eq!(v.capacity(), 0);

    let mut seen = vec![];
    for i in 0..30 {
        v.add(i);
        if seen.last() != Some(&v.capacity()) {
            seen.push(v.capacity());
        }
    }
    assert_eq!(seen, vec![10, 15, 22, 33]);
}

#[test]
fn test_growth_fires_one_slot_early() {
    let mut v = DynamicArray::with_capacity(10);
    for i in 0..9 {
        v.add(i);
    }
    assert_eq!(v.capacity(), 10);
    // One slot is still free, but len + 1 == capacity.
    v.add(9);
    assert_eq!(v.capacity(), 15);
    assert_eq!(v.size(), 10);
}

#[test]
fn test_small_initial_capacity_grows_to_default() {
    let mut v = DynamicArray::with_capacity(1);
    assert_eq!(v.capacity(), 1);
    v.add("a");
    assert_eq!(v.capacity(), DEFAULT_CAPACITY);
    assert_eq!(v.to_string(), "a");
}

#[test]
fn test_try_with_capacity() {
    let v: DynamicArray<i32> = DynamicArray::try_with_capacity(5).unwrap();
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.size(), 0);

    let err = DynamicArray::<i32>::try_with_capacity(-1).unwrap_err();
    assert_eq!(err, ArrayError::InvalidCapacity(-1));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_zero_capacity_matches_default() {
    let mut a: DynamicArray<i32> = DynamicArray::try_with_capacity(0).unwrap();
    let mut b = DynamicArray::new();
    assert_eq!(a.capacity(), 0);
    for i in 0..12 {
        a.add(i);
        b.add(i);
        assert_eq!(a.capacity(), b.capacity());
    }
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_add_at_index() {
    let mut v = DynamicArray::new();
    v.add(10);
    assert_eq!(v.add_at(0, 2), Ok(true));
    assert_eq!(v.size(), 2);
    assert_eq!(v.get(0), Ok(&2));
    assert_eq!(v.get(1), Ok(&10));
}

#[test]
fn test_add_at_invalid_index() {
    let mut v = DynamicArray::new();
    v.add(0);
    let err = v.add_at(2, 5).unwrap_err();
    assert_eq!(err, ArrayError::InvalidIndex { index: 2, size: 1 });
    assert_eq!(v.size(), 1);
}

#[test]
fn test_add_at_end() {
    let mut v = filled(3);
    v.add_at(3, 4).unwrap();
    assert_eq!(v.size(), 4);
    assert_eq!(v.get(3), Ok(&4));
}

#[test]
fn test_add_at_front_past_capacity() {
    let mut v = DynamicArray::with_capacity(2);
    for i in 0..25 {
        v.add_at(0, i).unwrap();
    }
    assert_eq!(v.size(), 25);
    assert!(v.capacity() > v.size());
    for i in 0..25 {
        assert_eq!(*v.get(i).unwrap(), 24 - i as i32);
    }
}

#[test]
fn test_add_at_middle_shifts() {
    let mut v = filled(5);
    v.add_at(2, 99).unwrap();
    assert_eq!(v.to_string(), "0 1 99 2 3 4");
}

#[test]
fn test_get() {
    let mut v = DynamicArray::new();
    v.add(100);
    assert_eq!(v.get(0), Ok(&100));
}

#[test]
fn test_get_invalid_index() {
    let v: DynamicArray<i32> = DynamicArray::new();
    assert_eq!(v.get(1), Err(ArrayError::InvalidIndex { index: 1, size: 0 }));

    let v = filled(4);
    for i in 0..4 {
        assert!(v.get(i).is_ok());
    }
    assert!(v.get(4).is_err());
    assert!(v.get(usize::MAX).is_err());
}

#[test]
fn test_remove() {
    let mut v = DynamicArray::new();
    v.add(1);
    assert_eq!(v.remove(0), Ok(1));
    assert!(v.is_empty());
}

#[test]
fn test_remove_invalid_index() {
    let mut v = DynamicArray::new();
    v.add(1);
    let err = v.remove(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(v.size(), 1);
}

#[test]
fn test_remove_shifts_down() {
    let mut v = filled(10);
    assert_eq!(v.remove(4), Ok(4));
    assert_eq!(v.size(), 9);
    assert_eq!(v.get(4), Ok(&5));
    assert_eq!(v.get(8), Ok(&9));
    assert_eq!(v.to_string(), "0 1 2 3 5 6 7 8 9");
}

#[test]
fn test_remove_last() {
    let mut v = filled(10);
    assert_eq!(v.remove(v.size() - 1), Ok(9));
    assert_eq!(v.size(), 9);
}

#[test]
fn test_remove_value_absent() {
    let mut v = DynamicArray::new();
    v.add(10);
    assert!(!v.remove_value(None));
    assert_eq!(v.size(), 1);
}

#[test]
fn test_remove_value_not_found() {
    let mut v = DynamicArray::new();
    v.add(10);
    v.add(20);
    assert!(!v.remove_value(Some(&30)));
    assert_eq!(v.size(), 2);
}

#[test]
fn test_remove_value_once() {
    let mut v = DynamicArray::new();
    v.add(20);
    v.add(10);
    assert!(v.remove_value(Some(&20)));
    assert!(!v.remove_value(Some(&20)));
    assert_eq!(v.size(), 1);
    assert_eq!(v.get(0), Ok(&10));
}

#[test]
fn test_remove_value_first_match_only() {
    let mut v: DynamicArray<_> = [1, 2, 1, 3].into_iter().collect();
    assert!(v.remove_value(Some(&1)));
    assert_eq!(v.to_string(), "2 1 3");
}

#[test]
fn test_size_tracks_adds_and_removes() {
    let mut v = DynamicArray::new();
    let mut rng = rand::rng();
    let mut expected = 0usize;
    for _ in 0..200 {
        if expected > 0 && rng.random_bool(0.3) {
            let index = rng.random_range(0..expected);
            v.remove(index).unwrap();
            expected -= 1;
        } else {
            v.add(rng.random::<i32>());
            expected += 1;
        }
        assert_eq!(v.size(), expected);
    }
}

#[test]
fn test_clear() {
    let mut v = filled(3);
    let cap = v.capacity();
    v.clear();
    assert_eq!(v.size(), 0);
    assert_eq!(v.to_string(), "");
    assert_eq!(v.capacity(), cap);
    v.clear();
    assert_eq!(v.size(), 0);
    assert_eq!(v.to_string(), "");
}

#[test]
fn test_clear_empty() {
    let mut v: DynamicArray<i32> = DynamicArray::new();
    v.clear();
    assert_eq!(v.size(), 0);
}

#[test]
fn test_reuse_after_clear() {
    let mut v = filled(12);
    v.clear();
    v.add(7);
    assert_eq!(v.get(0), Ok(&7));
    assert!(v.get(1).is_err());
}

#[test]
fn test_display() {
    assert_eq!(filled(3).to_string(), "0 1 2");
    assert_eq!(DynamicArray::<i32>::new().to_string(), "");
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", filled(3)), "[0, 1, 2]");
}

#[test]
fn test_quicksort_integers() {
    let mut v = DynamicArray::new();
    v.add(-6);
    v.add(10);
    v.add(-2);
    v.add(5);
    v.quicksort().unwrap();
    assert_eq!(v.to_string(), "-6 -2 5 10");
}

#[test]
fn test_quicksort_strings() {
    let mut v = DynamicArray::new();
    for s in ["b", "a", "d", "c"] {
        v.add(s.to_string());
    }
    v.quicksort().unwrap();
    assert_eq!(v.to_string(), "a b c d");
}

#[test]
fn test_quicksort_random() {
    let mut rng = rand::rng();
    for len in [0, 1, 2, 3, 17, 100] {
        let values: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let mut v: DynamicArray<i64> = values.iter().copied().collect();
        v.quicksort().unwrap();

        let mut expected = values;
        expected.sort();
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(v.get(i), Ok(want));
        }
    }
}

#[test]
fn test_quicksort_unordered() {
    let mut v: DynamicArray<f64> = [2.0, f64::NAN, 1.0].into_iter().collect();
    let err = v.quicksort().unwrap_err();
    assert_eq!(err, ArrayError::TypeMismatch);
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    // Still usable after a failed sort.
    assert_eq!(v.size(), 3);
    v.add(0.0);
    assert_eq!(v.size(), 4);
}

#[test]
fn test_quicksort_single_unordered() {
    let mut v = DynamicArray::new();
    v.add(f64::NAN);
    assert!(v.quicksort().is_ok());

    let mut empty: DynamicArray<f64> = DynamicArray::new();
    assert!(empty.quicksort().is_ok());
}

#[test]
fn test_drop_releases_elements() {
    let counter = Arc::new(AtomicUsize::new(0));
    struct Droppable(Arc<AtomicUsize>);
    impl Drop for Droppable {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    {
        let mut v = DynamicArray::new();
        for _ in 0..10 {
            v.add(Droppable(counter.clone()));
        }
        v.remove(3).unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        v.clear();
        assert_eq!(counter.load(Ordering::SeqCst), 10);
        for _ in 0..4 {
            v.add(Droppable(counter.clone()));
        }
    }
    assert_eq!(counter.load(Ordering::SeqCst), 14);
}

#[test]
fn test_shared_reads() {
    let v = filled(100);

    scope(|s| {
        s.spawn(|_| {
            for i in 0..v.size() {
                let _ = v.get(i).unwrap();
            }
        });
        s.spawn(|_| {
            assert_eq!(v.to_string().split(' ').count(), 100);
        });
    })
    .unwrap();
}

#[test]
fn test_clone_is_independent() {
    let mut a = filled(4);
    let b = a.clone();
    a.remove(0).unwrap();
    assert_eq!(a.to_string(), "1 2 3");
    assert_eq!(b.to_string(), "0 1 2 3");
    assert_eq!(b.capacity(), a.capacity());
}

#[test]
fn test_quicksort_all_equal_large() {
    let mut v: DynamicArray<i32> = std::iter::repeat(7).take(100_000).collect();
    v.quicksort().unwrap();
    assert_eq!(v.size(), 100_000);
    assert_eq!(v.get(0), Ok(&7));
    assert_eq!(v.get(99_999), Ok(&7));
}

#[test]
fn test_quicksort_already_sorted_large() {
    let mut v: DynamicArray<i32> = (0..100_000).collect();
    v.quicksort().unwrap();
    for i in [0usize, 1, 50_000, 99_998, 99_999] {
        assert_eq!(v.get(i), Ok(&(i as i32)));
    }
}
