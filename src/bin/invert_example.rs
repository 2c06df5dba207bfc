use gauss_invert::logging;
use gauss_invert::{MatrixResult, SquareMatrix};
use log::LevelFilter;

fn show_inversion() -> MatrixResult<()> {
    let mtx = SquareMatrix::from_list(vec![
        vec![1.0, 2.0, 3.0, 4.0, 0.0, -1.0, 0.0],
        vec![0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.0, 2.0, 2.0, 2.0, -2.0, 1.0, 3.0],
        vec![1.0, 3.0, 5.0, 7.0, 0.0, -1.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        vec![9.0, -2.0, 0.0, 0.0, 0.0, 2.0, 0.0],
    ])?;
    println!("Matrix is {}", mtx);

    let inverse = mtx.get_inverse()?;
    println!("Inversion is {:.6}", inverse);

    println!(
        "Multiplied is {:.6}\nor {:.6}",
        (&inverse * &mtx)?,
        (&mtx * &inverse)?
    );
    Ok(())
}

fn main() {
    logging::init(LevelFilter::Warn);

    if let Err(err) = show_inversion() {
        println!("{}", err);
    }
}
