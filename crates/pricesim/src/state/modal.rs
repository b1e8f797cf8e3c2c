/// Modal types for text entry and messages.
use super::FieldId;

/// What a confirmed text-input modal should do with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    EditField(FieldId),
    ExportCsv,
}

#[derive(Debug)]
pub enum ModalState {
    None,
    TextInput(TextInputModal),
    Message(MessageModal),
}

#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub prompt: String,
    pub value: String,
    pub cursor_pos: usize,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, prompt: &str, default_value: &str, action: ModalAction) -> Self {
        let value = default_value.to_string();
        let cursor_pos = value.chars().count();
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value,
            cursor_pos,
            action,
        }
    }

    /// Byte offset of the char at `cursor_pos`
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }
}

/// Notice shown after an action completes or fails
#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    /// Labelled values listed under the message, e.g. the exported path
    pub details: Vec<(String, String)>,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            details: Vec::new(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            is_error: true,
            ..Self::info(title, message)
        }
    }

    pub fn with_detail(mut self, label: &str, value: impl ToString) -> Self {
        self.details.push((label.to_string(), value.to_string()));
        self
    }

    /// Value of the first detail with this label
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut modal = TextInputModal::new("Edit", "Value:", "-1.3", ModalAction::ExportCsv);
        assert_eq!(modal.cursor_pos, 4);

        modal.backspace();
        modal.insert_char('5');
        assert_eq!(modal.value, "-1.5");

        modal.move_cursor_home();
        modal.delete();
        assert_eq!(modal.value, "1.5");

        modal.move_cursor_end();
        modal.move_cursor_right();
        assert_eq!(modal.cursor_pos, 3);

        modal.clear();
        assert!(modal.value.is_empty());
    }

    #[test]
    fn test_text_input_handles_multibyte_chars() {
        let mut modal = TextInputModal::new("Export", "Path:", "résumé.csv", ModalAction::ExportCsv);
        modal.move_cursor_home();
        modal.move_cursor_right();
        modal.move_cursor_right();
        modal.backspace();
        assert_eq!(modal.value, "rsumé.csv");
    }

    #[test]
    fn test_message_details() {
        let msg = MessageModal::error("Export Failed", "disk full").with_detail("Rows", 21);
        assert!(msg.is_error);
        assert_eq!(msg.detail("Rows"), Some("21"));
        assert_eq!(msg.detail("File"), None);
    }
}
