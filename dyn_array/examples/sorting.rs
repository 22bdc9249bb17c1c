use dyn_array::DynamicArray;

#[derive(Debug, PartialEq, PartialOrd)]
enum Reading {
    Celsius(f64),
    Missing,
}

fn main() {
    println!("--- Sorting Example ---");
    let mut words: DynamicArray<&str> = ["pear", "apple", "fig", "kiwi"].into_iter().collect();
    println!("Before: {}", words);
    match words.quicksort() {
        Ok(()) => println!("After:  {}", words),
        Err(e) => println!("Sort failed: {}", e),
    }

    let mut readings: DynamicArray<Reading> = DynamicArray::new();
    readings.add(Reading::Celsius(21.5));
    readings.add(Reading::Celsius(f64::NAN));
    readings.add(Reading::Missing);
    println!("Readings: {:?}", readings);
    match readings.quicksort() {
        Ok(()) => println!("Sorted readings: {:?}", readings),
        Err(e) => println!("Sort failed: {} ({:?})", e, e.kind()),
    }

    let mut single: DynamicArray<Reading> = DynamicArray::new();
    single.add(Reading::Celsius(f64::NAN));
    println!("Single element sort: {:?}", single.quicksort());
}
