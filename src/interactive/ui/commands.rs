use crate::selection::SelectedSubtopic;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ResolveContent(SelectedSubtopic),
    ShowMessage(String),
    ScheduleClearMessage(u64), // delay in milliseconds
    Quit,
}
