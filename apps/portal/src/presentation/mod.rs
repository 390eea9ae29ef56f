// Display-layer helpers shared by every view: number formatting and styling lookups.
// No view-specific logic lives here.

pub mod format;
pub mod theme;
