/// Implements `FromStr` for a `ValueEnum` by matching names and aliases
///
/// The error lists the primary names so config and env errors stay readable.
#[macro_export]
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $what:expr) => {
        impl std::str::FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let input = s.trim();
                let mut names = Vec::new();

                for variant in <Self as clap::ValueEnum>::value_variants() {
                    if let Some(value) = clap::ValueEnum::to_possible_value(variant) {
                        if value.matches(input, true) {
                            return Ok(*variant);
                        }
                        names.push(value.get_name().to_string());
                    }
                }

                Err($crate::primitives::ConfigError::ParseError {
                    value: s.to_string(),
                    reason: format!("invalid {}, expected one of: {}", $what, names.join(", ")),
                })
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
