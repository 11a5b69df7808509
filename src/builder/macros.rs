//! Macros for declaring phase enums.

/// Declare a fieldless phase enum.
///
/// Generates the enum with serde derives, an `ALL` slice in declaration
/// order, [`State`](crate::core::State) (variant names double as state names,
/// terminal variants listed after `final:`), and `Display` printing the name.
///
/// # Example
///
/// ```
/// use breathwork::core::State;
/// use breathwork::state_enum;
///
/// state_enum! {
///     pub enum BoxBreath {
///         Inhale,
///         HoldIn,
///         Exhale,
///         HoldOut,
///     }
/// }
///
/// assert_eq!(BoxBreath::ALL.len(), 4);
/// assert_eq!(BoxBreath::HoldIn.to_string(), "HoldIn");
/// assert!(!BoxBreath::HoldOut.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                #[allow(unreachable_patterns)]
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Phase, State};

    #[test]
    fn phase_lists_every_variant_in_order() {
        assert_eq!(
            Phase::ALL,
            &[Phase::Breathing, Phase::Paused, Phase::Finished]
        );
    }

    #[test]
    fn phase_names_match_variants() {
        let names: Vec<&str> = Phase::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Breathing", "Paused", "Finished"]);
    }

    #[test]
    fn only_finished_phase_is_final() {
        let finals: Vec<Phase> = Phase::ALL.iter().copied().filter(|p| p.is_final()).collect();
        assert_eq!(finals, vec![Phase::Finished]);
    }

    #[test]
    fn phase_displays_its_name() {
        assert_eq!(Phase::Paused.to_string(), "Paused");
        assert_eq!(format!("{}", Phase::Finished), "Finished");
    }

    #[test]
    fn phase_keeps_extra_derives() {
        let phase = Phase::Breathing;
        let copied = phase;
        assert_eq!(phase, copied);
    }

    #[test]
    fn phase_serializes_as_its_name() {
        for phase in Phase::ALL {
            let json = serde_json::to_string(phase).unwrap();
            assert_eq!(json, format!("\"{phase}\""));
            let back: Phase = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *phase);
        }
    }
}
