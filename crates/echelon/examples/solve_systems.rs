//! Solving linear systems with Echelon
//!
//! Run with: cargo run --example solve_systems

use echelon::prelude::*;

// Helper to parse decimal literals
fn sc(s: &str) -> Scalar {
    s.parse().expect("literal parses")
}

// Helper to build an equation from coefficient literals
fn equation(normal: &[&str], constant: &str) -> Hyperplane {
    Hyperplane::new(Vector::new(normal.iter().map(|c| sc(c))), sc(constant))
}

fn main() -> Result<(), SystemError> {
    example_1_unique_intersection()?;
    example_2_contradiction()?;
    example_3_underdetermined()?;
    example_4_vector_geometry();
    Ok(())
}

/// Example 1: Two lines crossing in a single point
fn example_1_unique_intersection() -> Result<(), SystemError> {
    println!("Example 1: unique intersection");

    let system = LinearSystem::new(vec![
        equation(&["1", "1"], "3"),
        equation(&["1", "-1"], "1"),
    ])?;

    println!("{system}");
    println!("  -> {}\n", system.solve());
    Ok(())
}

/// Example 2: Parallel, disjoint planes
fn example_2_contradiction() -> Result<(), SystemError> {
    println!("Example 2: contradictory system");

    let system = LinearSystem::new(vec![
        equation(&["5.862", "1.178", "-10.366"], "-8.15"),
        equation(&["-2.931", "-0.589", "5.183"], "-4.075"),
    ])?;

    println!("{system}");
    println!("  -> {}\n", system.solve());
    Ok(())
}

/// Example 3: Fewer independent equations than variables
fn example_3_underdetermined() -> Result<(), SystemError> {
    println!("Example 3: underdetermined system");

    let system = LinearSystem::new(vec![
        equation(&["1", "1", "1"], "1"),
        equation(&["1", "-1", "1"], "0"),
    ])?;

    println!("{system}");
    println!("  -> {}\n", system.solve());
    Ok(())
}

/// Example 4: The vector primitives behind the solver
fn example_4_vector_geometry() {
    println!("Example 4: vector geometry");

    let a = Vector::new([sc("3"), sc("4")]);
    let b = Vector::new([sc("4"), sc("0")]);

    println!("  |{a}| = {}", a.magnitude());
    println!("  {a} . {b} = {}", a.dot(&b));
    if let Some(parallel) = a.project_onto(&b) {
        println!("  projection of {a} onto {b} = {parallel}");
    }
    if let Some(angle) = a.angle_with(&b) {
        println!("  angle between {a} and {b} = {angle:.4} rad");
    }
}
