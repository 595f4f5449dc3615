/// The two text fields the engine drives: the input field holds the
/// number being typed, the output field shows results or error messages.
/// Keeps the engine free of any UI dependency.
pub trait DisplaySurface {
    fn input_text(&self) -> &str;
    fn set_input_text(&mut self, text: &str);
    fn output_text(&self) -> &str;
    fn set_output_text(&mut self, text: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenBuffer {
    input: String,
    output: String,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for ScreenBuffer {
    fn input_text(&self) -> &str {
        &self.input
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn output_text(&self) -> &str {
        &self.output
    }

    fn set_output_text(&mut self, text: &str) {
        self.output = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_buffer_starts_empty() {
        let screen = ScreenBuffer::new();
        assert_eq!(screen.input_text(), "");
        assert_eq!(screen.output_text(), "");
    }

    #[test]
    fn test_fields_are_independent() {
        let mut screen = ScreenBuffer::new();
        screen.set_input_text("12");
        screen.set_output_text("8");
        assert_eq!(screen.input_text(), "12");
        assert_eq!(screen.output_text(), "8");
        screen.set_input_text("");
        assert_eq!(screen.output_text(), "8");
    }
}
