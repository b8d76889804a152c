// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The closed enumerations a card is classified by.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The intensity tier of a card, from mildest to strongest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
    Extreme,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Action,
    Question,
    Game,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Romantic,
    Playful,
    Passionate,
    Deep,
}

/// The color the players pick on the level screen. Each color stands for a
/// fixed set of levels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelColor {
    #[default]
    White,
    Yellow,
    Pink,
    Red,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Extreme];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
            Level::Extreme => "extreme",
        }
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Action, Category::Question, Category::Game];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Question => "question",
            Category::Game => "game",
        }
    }
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Romantic, Mood::Playful, Mood::Passionate, Mood::Deep];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Romantic => "romantic",
            Mood::Playful => "playful",
            Mood::Passionate => "passionate",
            Mood::Deep => "deep",
        }
    }
}

impl LevelColor {
    pub const ALL: [LevelColor; 4] = [
        LevelColor::White,
        LevelColor::Yellow,
        LevelColor::Pink,
        LevelColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelColor::White => "white",
            LevelColor::Yellow => "yellow",
            LevelColor::Pink => "pink",
            LevelColor::Red => "red",
        }
    }

    /// The levels enabled when this color is selected.
    pub fn levels(&self) -> &'static [Level] {
        match self {
            LevelColor::White => &[Level::Easy],
            LevelColor::Yellow => &[Level::Medium],
            LevelColor::Pink => &[Level::Hard],
            LevelColor::Red => &[Level::Extreme],
        }
    }
}

impl FromStr for Level {
    type Err = ErrorReport;

    /// Accepts both tier names and the level colors the database build
    /// script writes in place of tiers.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            "extreme" => Ok(Level::Extreme),
            _ => match value.parse::<LevelColor>() {
                Ok(color) => Ok(color.levels()[0]),
                Err(_) => fail(format!("Invalid level: {value}")),
            },
        }
    }
}

impl FromStr for Category {
    type Err = ErrorReport;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "action" => Ok(Category::Action),
            "question" => Ok(Category::Question),
            "game" => Ok(Category::Game),
            _ => fail(format!("Invalid category: {value}")),
        }
    }
}

impl FromStr for Mood {
    type Err = ErrorReport;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "romantic" => Ok(Mood::Romantic),
            "playful" => Ok(Mood::Playful),
            "passionate" => Ok(Mood::Passionate),
            "deep" => Ok(Mood::Deep),
            _ => fail(format!("Invalid mood: {value}")),
        }
    }
}

impl FromStr for LevelColor {
    type Err = ErrorReport;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "white" => Ok(LevelColor::White),
            "yellow" => Ok(LevelColor::Yellow),
            "pink" => Ok(LevelColor::Pink),
            "red" => Ok(LevelColor::Red),
            _ => fail(format!("Invalid level color: {value}")),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
        }
    }

    #[test]
    fn test_level_accepts_colors() {
        assert_eq!("white".parse::<Level>(), Ok(Level::Easy));
        assert_eq!("yellow".parse::<Level>(), Ok(Level::Medium));
        assert_eq!("pink".parse::<Level>(), Ok(Level::Hard));
        assert_eq!("red".parse::<Level>(), Ok(Level::Extreme));
    }

    #[test]
    fn test_invalid_values() {
        assert!("Easy".parse::<Level>().is_err());
        assert!("dare".parse::<Category>().is_err());
        assert!("".parse::<Mood>().is_err());
        assert!("blue".parse::<LevelColor>().is_err());
    }

    #[test]
    fn test_color_levels() {
        assert_eq!(LevelColor::White.levels(), &[Level::Easy]);
        assert_eq!(LevelColor::Red.levels(), &[Level::Extreme]);
        assert_eq!(LevelColor::default(), LevelColor::White);
    }
}
