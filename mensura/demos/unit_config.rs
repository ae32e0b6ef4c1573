//! Loading a unit table for a user-defined kind from TOML.

use mensura::{UnitKind, UnitTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, UnitKind)]
enum AngleUnit {
    Radian,
    Degree,
    #[unit(name = "Gon")]
    Gradian,
}

const CONFIG: &str = r#"
kind = "Angle"
base_unit = "Radian"

[[units]]
name = "Radian"
scale = 1.0
abbreviation = "rad"

[[units]]
name = "Degree"
scale = 0.017453292519943295
abbreviation = "°"

[[units]]
name = "Gon"
scale = 0.015707963267948967
abbreviation = "gon"
"#;

fn main() {
    let table = match UnitTable::<AngleUnit>::from_toml_str(CONFIG) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    for entry in table.entries() {
        println!("{:>8} {:>4} = {} rad", entry.unit().name(), entry.abbreviation(), entry.scale());
    }

    let right_angle = table.convert_value(90.0, AngleUnit::Degree, AngleUnit::Gradian).unwrap();
    println!("90 ° = {right_angle:.2} gon");
    assert!((right_angle - 100.0).abs() < 1e-9);
}
