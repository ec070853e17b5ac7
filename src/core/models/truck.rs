use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Truck characteristics used for fuel arithmetic
///
/// Only `mpg` and `tank_capacity_gal` take part in estimates; the remaining
/// fields are descriptive. Integer fields also accept integral floats such as
/// `200.0` and integer strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    /// Manufacturer, e.g. Freightliner, Volvo
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lax_int_opt")]
    pub year: Option<i64>,
    /// Engine family, e.g. DD15, X15
    #[serde(default)]
    pub engine: Option<String>,
    /// Average fuel economy in miles per gallon, exclusive range (2, 15)
    pub mpg: f64,
    /// Total tank capacity in gallons, exclusive range (50, 500)
    #[serde(deserialize_with = "lax_int")]
    pub tank_capacity_gal: i64,
    /// Dry Van, Reefer, Flatbed
    #[serde(default)]
    pub trailer_type: Option<String>,
    /// Typical gross weight in pounds
    #[serde(default, deserialize_with = "lax_int_opt")]
    pub typical_weight_lbs: Option<i64>,
}

impl TruckSpec {
    /// Minimal spec with only the fields estimates depend on
    pub fn new(mpg: f64, tank_capacity_gal: i64) -> Self {
        Self {
            make: None,
            model: None,
            year: None,
            engine: None,
            mpg,
            tank_capacity_gal,
            trailer_type: None,
            typical_weight_lbs: None,
        }
    }

    /// Tank capacity as a float for fuel arithmetic
    pub fn tank_capacity(&self) -> f64 {
        self.tank_capacity_gal as f64
    }
}

/// Largest float that still converts to an exact integer
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

struct LaxInt(i64);

impl<'de> Deserialize<'de> for LaxInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LaxIntVisitor;

        impl Visitor<'_> for LaxIntVisitor {
            type Value = LaxInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, an integral float or an integer string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<LaxInt, E> {
                Ok(LaxInt(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<LaxInt, E> {
                i64::try_from(value)
                    .map(LaxInt)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<LaxInt, E> {
                if value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT {
                    Ok(LaxInt(value as i64))
                } else {
                    Err(E::invalid_value(Unexpected::Float(value), &self))
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<LaxInt, E> {
                value
                    .trim()
                    .parse()
                    .map(LaxInt)
                    .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(LaxIntVisitor)
    }
}

fn lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    LaxInt::deserialize(deserializer).map(|LaxInt(value)| value)
}

fn lax_int_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LaxInt>::deserialize(deserializer).map(|value| value.map(|LaxInt(value)| value))
}
