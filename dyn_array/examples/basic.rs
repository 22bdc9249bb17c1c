use dyn_array::DynamicArray;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=12 {
        arr.add(i * 10);
        println!("Added: {}, size: {}, cap: {}", i * 10, arr.size(), arr.capacity());
    }

    println!("Elements: {}", arr);

    while !arr.is_empty() {
        if let Ok(val) = arr.remove(0) {
            println!("Removed: {}, size: {}", val, arr.size());
        }
    }
}
