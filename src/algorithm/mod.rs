/// Visited-cell bitset shared by flood fills
pub mod bitset;
/// Connected-component extraction with one global visited set
pub mod components;
/// Corner-rectangle and solid-square search
pub mod rectangles;
/// Shape keys and congruence grouping
pub mod shapes;
