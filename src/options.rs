#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_hidden: bool,
    pub dirs_only: bool,
}
impl RenderOptions {
    pub fn mode_description(&self) -> &'static str {
        if self.dirs_only {
            "Directories Only"
        } else {
            "Directories and Files"
        }
    }
    pub fn hidden_description(&self) -> &'static str {
        if self.show_hidden { "Shown" } else { "Hidden" }
    }
}
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}
impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.options.show_hidden = yes;
        self
    }
    pub fn dirs_only(mut self, yes: bool) -> Self {
        self.options.dirs_only = yes;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}
