//! Per-parameter threshold checks for reef aquarium water.
//!
//! Each analyzer maps a reading to exactly one [`ParameterInsight`]. Branches
//! are evaluated top to bottom with plain float comparisons, so a NaN reading
//! fails every check and lands on the last branch.

use super::models::{
    InsightStatus::{self, Critical, Good, Warning},
    Parameter, ParameterInsight, ParsedParameterValues,
};

pub fn analyze_ph(ph: f64) -> ParameterInsight {
    let p = Parameter::Ph;
    if ph < 7.8 {
        ParameterInsight::new(p, ph, Critical, format!("pH is critically low at {}", ph))
            .recommend("Raise pH gradually with a buffer and increase surface agitation")
    } else if ph < 8.0 {
        ParameterInsight::new(p, ph, Warning, format!("pH is slightly low at {}", ph))
            .recommend("Check alkalinity and improve aeration to raise pH")
    } else if ph > 8.5 {
        ParameterInsight::new(p, ph, Warning, format!("pH is high at {}", ph))
            .recommend("Reduce alkalinity dosing and verify kalkwasser additions")
    } else {
        ParameterInsight::new(p, ph, Good, format!("pH is optimal at {}", ph))
    }
}

pub fn analyze_salinity(salinity: f64) -> ParameterInsight {
    let p = Parameter::Salinity;
    if salinity < 1.020 {
        ParameterInsight::new(p, salinity, Critical, format!("Salinity is critically low at {}", salinity))
            .recommend("Raise salinity slowly with premixed saltwater over several days")
    } else if salinity < 1.023 {
        ParameterInsight::new(p, salinity, Warning, format!("Salinity is slightly low at {}", salinity))
            .recommend("Top off with saltwater instead of freshwater until salinity recovers")
    } else if salinity > 1.027 {
        ParameterInsight::new(p, salinity, Warning, format!("Salinity is high at {}", salinity))
            .recommend("Replace some saltwater with RO/DI freshwater to lower salinity")
    } else {
        ParameterInsight::new(p, salinity, Good, format!("Salinity is optimal at {}", salinity))
    }
}

/// The advisory text cites a 74-78°F optimum; the thresholds are 72 and 82.
pub fn analyze_temperature(temperature: f64) -> ParameterInsight {
    let p = Parameter::Temperature;
    if temperature < 72.0 || temperature > 82.0 {
        ParameterInsight::new(
            p,
            temperature,
            Warning,
            format!("Temperature is outside the ideal range at {}°F (optimal 74-78°F)", temperature),
        )
        .recommend("Adjust the heater or cooling to hold 74-78°F")
    } else {
        ParameterInsight::new(p, temperature, Good, format!("Temperature is stable at {}°F (optimal 74-78°F)", temperature))
    }
}

pub fn analyze_ammonia(ammonia: f64) -> ParameterInsight {
    let p = Parameter::Ammonia;
    if ammonia > 0.25 {
        ParameterInsight::new(p, ammonia, Critical, format!("Ammonia is dangerously high at {} ppm", ammonia))
            .recommend("Perform an immediate water change and dose an ammonia detoxifier")
    } else if ammonia > 0.0 {
        ParameterInsight::new(p, ammonia, Warning, format!("Ammonia detected at {} ppm", ammonia))
            .recommend("Reduce feeding and check for decaying matter")
    } else {
        ParameterInsight::new(p, ammonia, Good, format!("Ammonia is safe at {} ppm", ammonia))
    }
}

pub fn analyze_nitrite(nitrite: f64) -> ParameterInsight {
    let p = Parameter::Nitrite;
    if nitrite > 0.5 {
        ParameterInsight::new(p, nitrite, Critical, format!("Nitrite is dangerously high at {} ppm", nitrite))
            .recommend("Perform a water change and add beneficial bacteria")
    } else if nitrite > 0.0 {
        ParameterInsight::new(p, nitrite, Warning, format!("Nitrite detected at {} ppm", nitrite))
            .recommend("Monitor daily; the biological filter may still be cycling")
    } else {
        ParameterInsight::new(p, nitrite, Good, format!("Nitrite is safe at {} ppm", nitrite))
    }
}

pub fn analyze_nitrate(nitrate: f64) -> ParameterInsight {
    let p = Parameter::Nitrate;
    if nitrate > 50.0 {
        ParameterInsight::new(p, nitrate, Critical, format!("Nitrate is very high at {} ppm", nitrate))
            .recommend("Perform large water changes and reduce the bioload")
    } else if nitrate > 20.0 {
        ParameterInsight::new(p, nitrate, Warning, format!("Nitrate is elevated at {} ppm", nitrate))
            .recommend("Increase water change frequency or add nutrient export")
    } else if nitrate <= 10.0 {
        ParameterInsight::new(p, nitrate, Good, format!("Nitrate is excellent at {} ppm", nitrate))
    } else {
        ParameterInsight::new(p, nitrate, Good, format!("Nitrate is good at {} ppm", nitrate))
    }
}

pub fn analyze_alkalinity(alkalinity: f64) -> ParameterInsight {
    let p = Parameter::Alkalinity;
    if alkalinity < 7.0 {
        ParameterInsight::new(p, alkalinity, Warning, format!("Alkalinity is low at {} dKH", alkalinity))
            .recommend("Dose an alkalinity supplement to reach 8-12 dKH")
    } else if alkalinity > 13.0 {
        ParameterInsight::new(p, alkalinity, Warning, format!("Alkalinity is high at {} dKH", alkalinity))
            .recommend("Pause alkalinity dosing and let levels drift down")
    } else {
        ParameterInsight::new(p, alkalinity, Good, format!("Alkalinity is optimal at {} dKH", alkalinity))
    }
}

pub fn analyze_calcium(calcium: f64) -> ParameterInsight {
    let p = Parameter::Calcium;
    if calcium < 380.0 {
        ParameterInsight::new(p, calcium, Warning, format!("Calcium is low at {} ppm", calcium))
            .recommend("Dose a calcium supplement to reach 400-450 ppm")
    } else if calcium > 470.0 {
        ParameterInsight::new(p, calcium, Warning, format!("Calcium is high at {} ppm", calcium))
            .recommend("Reduce calcium dosing")
    } else {
        ParameterInsight::new(p, calcium, Good, format!("Calcium is optimal at {} ppm", calcium))
    }
}

pub fn analyze_magnesium(magnesium: f64) -> ParameterInsight {
    let p = Parameter::Magnesium;
    if magnesium < 1200.0 {
        ParameterInsight::new(p, magnesium, Warning, format!("Magnesium is low at {} ppm", magnesium))
            .recommend("Dose a magnesium supplement to reach 1300-1400 ppm")
    } else if magnesium > 1500.0 {
        ParameterInsight::new(p, magnesium, Warning, format!("Magnesium is high at {} ppm", magnesium))
            .recommend("Reduce magnesium dosing")
    } else {
        ParameterInsight::new(p, magnesium, Good, format!("Magnesium is optimal at {} ppm", magnesium))
    }
}

/// Ammonia, nitrite and nitrate, always evaluated.
pub fn analyze_nitrogen_cycle(parsed: &ParsedParameterValues) -> Vec<ParameterInsight> {
    vec![
        analyze_ammonia(parsed.ammonia),
        analyze_nitrite(parsed.nitrite),
        analyze_nitrate(parsed.nitrate),
    ]
}

/// Alkalinity, calcium and magnesium, each only when measured (> 0).
pub fn analyze_reef_chemistry(parsed: &ParsedParameterValues) -> Vec<ParameterInsight> {
    let mut insights = Vec::new();
    if parsed.alkalinity > 0.0 {
        insights.push(analyze_alkalinity(parsed.alkalinity));
    }
    if parsed.calcium > 0.0 {
        insights.push(analyze_calcium(parsed.calcium));
    }
    if parsed.magnesium > 0.0 {
        insights.push(analyze_magnesium(parsed.magnesium));
    }
    insights
}

/// Placeholder insight for a required reading that could not be read.
pub fn insufficient_data(parameter: Parameter) -> ParameterInsight {
    ParameterInsight::new(
        parameter,
        f64::NAN,
        InsightStatus::InsufficientData,
        format!("{} was not measured or could not be read", parameter.label()),
    )
    .recommend("Retest and enter pH, salinity and temperature for a complete analysis")
}
