//! Centralized icon definitions.
//!
//! Maps semantic names onto the lucide set so call sites never spell a
//! concrete icon name twice.

pub use icondata::{
    LuArrowLeft as ARROW_LEFT, LuChevronRight as CHEVRON_RIGHT, LuCircleCheck as CHECK_CIRCLE,
    LuCircleX as CROSS_CIRCLE, LuCode as CODE, LuDatabase as DATABASE, LuDollarSign as DOLLAR,
    LuDownload as DOWNLOAD, LuExternalLink as EXTERNAL_LINK, LuEye as EYE, LuFile as FILE,
    LuFileText as FILE_TEXT, LuFolder as FOLDER, LuFolderOpen as FOLDER_OPEN,
    LuGitBranch as GIT_BRANCH, LuGithub as GITHUB, LuImage as FILE_IMAGE,
    LuLoaderCircle as LOADER, LuLogOut as LOG_OUT, LuSearch as SEARCH, LuSettings as FILE_CONFIG,
    LuShare2 as SHARE, LuTerminal as TERMINAL, LuTrash2 as TRASH, LuTriangleAlert as WARNING,
    LuUpload as UPLOAD, LuUser as USER, LuX as CLOSE,
};
