// Rebuild when a migration is added so `migrate!` embeds it.
fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
