//! Temperature message shown on the first line of a reading

use crate::state::TempUnit;

/// Upper bounds (exclusive) for freezing, cold, comfortable and pleasant.
fn thresholds(unit: TempUnit) -> [f64; 4] {
    match unit {
        TempUnit::Celsius => [0.0, 10.0, 20.0, 30.0],
        TempUnit::Fahrenheit => [32.0, 50.0, 68.0, 86.0],
    }
}

/// Describe `temperature` in `unit` with a short piece of advice.
///
/// The value is printed in its shortest round-trip form, so `15.0` reads
/// as `15` and a converted `59.00000000000001` is shown as is.
pub fn temperature_message(temperature: f64, unit: TempUnit) -> String {
    let [freezing, cold, comfortable, pleasant] = thresholds(unit);
    let value = format!("{}{}", temperature, unit.symbol());

    if temperature < freezing {
        format!("It's freezing at {value}! Bundle up!")
    } else if temperature < cold {
        format!("It's quite cold at {value}. Wear warm clothes.")
    } else if temperature < comfortable {
        format!("The temperature is {value}. Comfortable for a light jacket.")
    } else if temperature < pleasant {
        format!("It's a pleasant {value}. Enjoy the nice weather!")
    } else {
        format!("It's hot at {value}. Stay hydrated!")
    }
}
