/// Options that control how fields are inferred from a recording.
#[derive(Debug, Clone)]
pub struct InferOptions {
    /// Derive a label from the command locator when the recorder captured none.
    pub label_from_target: bool,
    /// `required` flag given to every proposed field.
    pub required: bool,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            label_from_target: false,
            required: true,
        }
    }
}
