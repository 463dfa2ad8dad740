//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ParentFolder, LuCheck as Checked, LuCheckCheck as SelectAll,
        LuDownload as Download, LuFile as File, LuFolder as Folder, LuFolderPlus as CreateFolder,
        LuFolderX as DeleteFolder, LuListChecks as SelectMode, LuPlay as Video, LuPlus as Plus,
        LuSquare as Unchecked, LuTrash2 as Delete, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUpCircle as ParentFolder, BsCheck2All as SelectAll, BsCheck2Square as SelectMode,
        BsCheckSquareFill as Checked, BsDownload as Download, BsFileEarmark as File,
        BsFolderFill as Folder, BsFolderPlus as CreateFolder, BsFolderX as DeleteFolder,
        BsPlayBtn as Video, BsPlusLg as Plus, BsSquare as Unchecked, BsTrash as Delete,
        BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(PARENT_FOLDER, ParentFolder);
themed_icon!(FILE, File);
themed_icon!(VIDEO, Video);
themed_icon!(PLUS, Plus);
themed_icon!(CLOSE, Close);
themed_icon!(SELECT_MODE, SelectMode);
themed_icon!(SELECT_ALL, SelectAll);
themed_icon!(CHECKED, Checked);
themed_icon!(UNCHECKED, Unchecked);
themed_icon!(DOWNLOAD, Download);
themed_icon!(DELETE, Delete);
themed_icon!(CREATE_FOLDER, CreateFolder);
themed_icon!(DELETE_FOLDER, DeleteFolder);
themed_icon!(UPLOAD, Upload);
