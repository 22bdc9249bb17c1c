use dyn_array::DynamicArray;

fn main() {
    println!("Initializing DynamicArray...");
    let mut array = DynamicArray::new();

    println!("Adding elements...");
    for i in 0..15 {
        array.add(i);
    }

    assert_eq!(array.size(), 15);
    println!("Array size verified: {} (capacity {})", array.size(), array.capacity());

    println!("Reading elements:");
    for i in 0..array.size() {
        let val = array.get(i).copied().unwrap_or_default();
        println!("Index {}: {}", i, val);
        assert_eq!(i, val);
    }

    println!("Reversing through add_at/remove...");
    for i in 0..array.size() {
        let val = array.remove(array.size() - 1);
        assert!(val.is_ok());
        if let Ok(val) = val {
            assert!(array.add_at(i, val).is_ok());
        }
    }
    assert_eq!(array.size(), 15);
    assert_eq!(array.get(0).copied(), Ok(14));
    println!("Reversed: {}", array);

    array.quicksort().unwrap_or_else(|e| panic!("sort failed: {}", e));
    println!("Sorted: {}", array);
    assert_eq!(array.get(0).copied(), Ok(0));

    array.clear();
    assert_eq!(array.size(), 0);
    println!("Integration test passed successfully.");
}
