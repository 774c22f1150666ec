// Filename conventions for sidecar files (NFO, poster, fanart)

use serde::{Deserialize, Serialize};

/// A naming convention maps the unit's base filename to a sidecar filename
pub trait FileNaming {
    fn filename(&self, basename: &str) -> String;

    /// Whether the name is derived from the video filename (as opposed to a fixed name)
    fn is_filename_based(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NfoNaming {
    /// `<file>.nfo`
    FilenameNfo,
    /// `movie.nfo`
    MovieNfo,
}

impl FileNaming for NfoNaming {
    fn filename(&self, basename: &str) -> String {
        match self {
            NfoNaming::FilenameNfo => format!("{}.nfo", basename),
            NfoNaming::MovieNfo => "movie.nfo".to_string(),
        }
    }

    fn is_filename_based(&self) -> bool {
        matches!(self, NfoNaming::FilenameNfo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosterNaming {
    PosterJpg,
    PosterPng,
    FolderJpg,
    FolderPng,
    /// `<file>-poster.jpg`
    FilenamePosterJpg,
    FilenamePosterPng,
    /// `<file>.jpg`
    FilenameJpg,
    FilenamePng,
}

impl FileNaming for PosterNaming {
    fn filename(&self, basename: &str) -> String {
        match self {
            PosterNaming::PosterJpg => "poster.jpg".to_string(),
            PosterNaming::PosterPng => "poster.png".to_string(),
            PosterNaming::FolderJpg => "folder.jpg".to_string(),
            PosterNaming::FolderPng => "folder.png".to_string(),
            PosterNaming::FilenamePosterJpg => format!("{}-poster.jpg", basename),
            PosterNaming::FilenamePosterPng => format!("{}-poster.png", basename),
            PosterNaming::FilenameJpg => format!("{}.jpg", basename),
            PosterNaming::FilenamePng => format!("{}.png", basename),
        }
    }

    fn is_filename_based(&self) -> bool {
        matches!(
            self,
            PosterNaming::FilenamePosterJpg
                | PosterNaming::FilenamePosterPng
                | PosterNaming::FilenameJpg
                | PosterNaming::FilenamePng
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanartNaming {
    FanartJpg,
    FanartPng,
    /// `<file>-fanart.jpg`
    FilenameFanartJpg,
    FilenameFanartPng,
    /// `<file>.fanart.jpg`
    FilenameDotFanartJpg,
    FilenameDotFanartPng,
}

impl FileNaming for FanartNaming {
    fn filename(&self, basename: &str) -> String {
        match self {
            FanartNaming::FanartJpg => "fanart.jpg".to_string(),
            FanartNaming::FanartPng => "fanart.png".to_string(),
            FanartNaming::FilenameFanartJpg => format!("{}-fanart.jpg", basename),
            FanartNaming::FilenameFanartPng => format!("{}-fanart.png", basename),
            FanartNaming::FilenameDotFanartJpg => format!("{}.fanart.jpg", basename),
            FanartNaming::FilenameDotFanartPng => format!("{}.fanart.png", basename),
        }
    }

    fn is_filename_based(&self) -> bool {
        !matches!(self, FanartNaming::FanartJpg | FanartNaming::FanartPng)
    }
}
