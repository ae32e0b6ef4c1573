//! Minimal end-to-end example: build, combine, compare and print quantities.

use mensura::{ElectricPotential, ElectricPotentialUnit, Length, LengthUnit, Quantity};

fn main() {
    let supply = Quantity::<ElectricPotential>::from_volts(5.0);
    let drop = Quantity::<ElectricPotential>::from_millivolts(700.0);
    let remaining = supply - drop;
    println!("remaining: {remaining}");
    assert!(remaining < supply);

    let shown = remaining.display_in(ElectricPotentialUnit::Millivolt).unwrap();
    println!("           {shown}");

    let run: Quantity<Length> = "10 km".parse().unwrap();
    let miles = run.convert(LengthUnit::Mile).unwrap();
    println!("{run} is {miles:.3} mi");
    assert!((miles - 6.2137).abs() < 1e-4);
}
