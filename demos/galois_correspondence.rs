//! Galois Correspondence
//!
//! This example demonstrates:
//! - Building GF(p^n) and listing its Galois group
//! - The Frobenius automorphism as a generator
//! - The subgroup / fixed-field table and its verification
//!
//! Run with: cargo run --example galois_correspondence

use galext::{GaloisCorrespondence, Group, GF};

fn main() {
    println!("=== Galois Correspondence ===\n");

    for (p, n) in [(2, 4), (2, 6), (3, 4)] {
        if let Err(err) = show(p, n) {
            eprintln!("GF({p}^{n}): {err}");
        }
    }
}

fn show(p: u64, n: usize) -> galext::Result<()> {
    let gf = GF::new(p, n)?;
    let ext = gf.extension();
    println!("--- {gf} ---");
    println!("modulus: {}", ext.poly_ring().render(gf.modulus()));

    let group = gf.galois_group()?;
    println!(
        "|Gal| = {}, Galois: {}, cyclic: {}",
        group.order(),
        group.is_galois(),
        group.is_cyclic()
    );

    let frob = gf.frobenius_automorphism();
    println!(
        "Frobenius: α ↦ {} (order {:?})",
        ext.render(frob.image()),
        group.element_order(&frob, group.order())
    );

    let report = GaloisCorrespondence::new(&group).verify()?;
    println!("  |H|  [L^H:K]  |L^H|  normal");
    for entry in &report.entries {
        println!(
            "  {:>3}  {:>7}  {:>5}  {}",
            entry.subgroup_order, entry.fixed_field_degree, entry.fixed_field_size, entry.is_normal
        );
    }
    println!(
        "index-degree law: {}, injective: {}\n",
        report.index_degree_law_holds, report.injective
    );
    Ok(())
}
