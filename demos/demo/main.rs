//! Prints a few vector, matrix and line computations.
//!
//! Usage:
//! ```text
//! cargo run --example demo
//! RUST_LOG=linalg=trace cargo run --example demo
//! ```

use linalg::{Line, Matrix, Point2, Result, Vector, Vector2};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for linalg.
    // Override with RUST_LOG env var (e.g. RUST_LOG=linalg=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("linalg=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Vector::new(vec![1.0, 2.0]);
    let b = Vector::new(vec![3.0, 4.0]);
    println!("{a} + {b} = {}", a.sum(&b)?);
    println!("{a} - {b} = {}", a.subtract(&b)?);

    let m = Matrix::from_rows(vec![
        Vector::new(vec![2.0, -1.0, 0.0]),
        Vector::new(vec![1.0, 3.0, 2.0]),
        Vector::new(vec![0.0, 1.0, 4.0]),
    ])?;
    println!("\nM =\n{m}");
    println!("\ndet(M) = {}", m.determinant()?);
    println!("\nadj(M) =\n{}", m.adjoint()?);
    let inverse = m.inverse()?;
    println!("\ninverse(M) =\n{inverse}");
    println!("\nM x inverse(M) =\n{}", m.multiply(&inverse)?);

    let singular = Matrix::from_rows(vec![
        Vector::new(vec![1.0, 2.0]),
        Vector::new(vec![2.0, 4.0]),
    ])?;
    if let Err(err) = singular.inverse() {
        println!("\n{err}");
    }

    let l0 = Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
    let l1 = Line::new(Point2::new(2.0, 0.0), Vector2::new(0.0, 1.0));
    println!("\nintersection = {}", l0.intersection(&l1)?);
    let foot = l1.intersection(&l1.perpendicular_through(Point2::new(5.0, 3.0)))?;
    println!("foot of perpendicular = {foot}");
    if let Err(err) = l0.intersection(&l0.parallel_through(Point2::new(0.0, 1.0))) {
        println!("{err}");
    }

    Ok(())
}
