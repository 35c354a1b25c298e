/// Centralized channel naming utilities
///
/// Provides consistent component names for position telemetry across the
/// plot functions and data analysis modules.
/// Get the standard component name for a given index
///
/// # Arguments
/// * `index` - Component index (0=X, 1=Y, 2=Z)
///
/// # Returns
/// Static string slice with the component name
///
/// # Panics
/// Panics if index is greater than 2
pub fn component_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid component index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}

/// Get all position component names as a static array
pub const POSITION_COMPONENT_NAMES: [&str; 3] = ["X", "Y", "Z"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name() {
        assert_eq!(component_name(0), "X");
        assert_eq!(component_name(1), "Y");
        assert_eq!(component_name(2), "Z");
    }

    #[test]
    #[should_panic(expected = "Invalid component index")]
    fn test_component_name_panic() {
        component_name(3);
    }

    #[test]
    fn test_position_component_names_constant() {
        assert_eq!(POSITION_COMPONENT_NAMES[0], "X");
        assert_eq!(POSITION_COMPONENT_NAMES[1], "Y");
        assert_eq!(POSITION_COMPONENT_NAMES[2], "Z");
    }
}
