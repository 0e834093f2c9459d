#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Content,
}

#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub title: String,
    pub content: String,
    pub field: ComposeField,
}

impl ComposeState {
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.field = ComposeField::Title;
    }

    pub fn focused_buffer(&mut self) -> &mut String {
        match self.field {
            ComposeField::Title => &mut self.title,
            ComposeField::Content => &mut self.content,
        }
    }
}
