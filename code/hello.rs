fn main() {
    println!("$$$");
}
