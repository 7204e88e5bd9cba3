fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = polynomial_painter::PpmFilePresenter::new();
    let mut controller = polynomial_painter::CliController::new(presenter);

    controller.generate()?;

    std::fs::create_dir_all("output")?;
    controller.write("output/polynomial.ppm", "output/fractal.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
