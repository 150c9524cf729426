use pagebuilder_components::Component;

/// Whether the copy/drag/remove toolbar should be shown for a selected
/// component
pub fn toolbar_visible(component: &Component) -> bool {
    component.capabilities.is_manipulable()
}
