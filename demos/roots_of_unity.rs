//! Roots of Unity
//!
//! This example demonstrates:
//! - Cyclotomic polynomials over GF(p)
//! - Splitting fields of x^n - 1 and their degree ord_n(p)
//! - Primitive n-th roots of unity
//!
//! Run with: cargo run --example roots_of_unity

use galext::{euler_phi, CyclotomicExtension};

fn main() {
    println!("=== Roots of Unity ===\n");

    for (n, p) in [(4, 3), (5, 2), (8, 3), (12, 5)] {
        match CyclotomicExtension::new(n, p) {
            Ok(cyc) => show(&cyc, p),
            Err(err) => eprintln!("n = {n}, p = {p}: {err}"),
        }
    }

    // p | n has no separable splitting field
    if let Err(err) = CyclotomicExtension::new(6, 3) {
        println!("n = 6, p = 3: {err}");
    }
}

fn show(cyc: &CyclotomicExtension, p: u64) {
    let field = cyc.field();
    let ext = field.extension();
    let n = cyc.n();

    println!("--- n = {n} over GF({p}) ---");
    println!("Φ_{n} = {}", ext.poly_ring().render(cyc.polynomial()));
    println!("splitting field: {field} (degree {})", cyc.splitting_degree());

    let prims = cyc.primitive_roots_of_unity();
    println!(
        "{} roots of unity, {} primitive (φ({n}) = {})",
        cyc.roots_of_unity().len(),
        prims.len(),
        euler_phi(n)
    );
    for a in &prims {
        println!("  {}", ext.render(a));
    }
    println!();
}
