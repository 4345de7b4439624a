//! JSON documents stored in the collection's `col` row.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::schema::DEFAULT_DECK_ID;

/// Styling shared by both card sides; `pre-wrap` keeps the answer's line breaks and tabs.
pub const DEFAULT_CSS: &str = ".card {
 font-family: arial;
 font-size: 20px;
 text-align: center;
 color: black;
 background-color: white;
 white-space: pre-wrap;
}
";

const LATEX_PRE: &str = "\\documentclass[12pt]{article}\n\\special{papersize=3in,5in}\n\\usepackage[utf8]{inputenc}\n\\usepackage{amssymb,amsmath}\n\\pagestyle{empty}\n\\setlength{\\parindent}{0in}\n\\begin{document}\n";
const LATEX_POST: &str = "\\end{document}";

/// A note field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    pub name: String,
    pub ord: u32,
    pub font: String,
    pub media: Vec<String>,
    pub rtl: bool,
    pub size: u32,
    pub sticky: bool,
}

impl ModelField {
    fn new(name: &str, ord: u32) -> Self {
        Self {
            name: name.to_string(),
            ord,
            font: "Liberation Sans".to_string(),
            media: Vec::new(),
            rtl: false,
            size: 20,
            sticky: false,
        }
    }
}

/// A card template (one card per note for this model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub ord: u32,
    pub qfmt: String,
    pub afmt: String,
    pub bqfmt: String,
    pub bafmt: String,
    pub did: Option<i64>,
    pub bfont: String,
    pub bsize: u32,
}

/// Note type with a Question and an Answer field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteModel {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(rename = "mod")]
    pub modified: i64,
    pub usn: i32,
    pub sortf: u32,
    pub did: i64,
    pub tmpls: Vec<CardTemplate>,
    pub flds: Vec<ModelField>,
    pub css: String,
    pub latex_pre: String,
    pub latex_post: String,
    pub latexsvg: bool,
    pub req: Vec<(u32, String, Vec<u32>)>,
    pub tags: Vec<String>,
    pub vers: Vec<Value>,
}

impl NoteModel {
    /// The two-field model used for every card.
    pub fn simple(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: 0,
            modified: 0,
            usn: -1,
            sortf: 0,
            did: DEFAULT_DECK_ID,
            tmpls: vec![CardTemplate {
                name: "Card 1".to_string(),
                ord: 0,
                qfmt: "{{Question}}".to_string(),
                afmt: "{{FrontSide}}<hr id='answer'>{{Answer}}".to_string(),
                bqfmt: String::new(),
                bafmt: String::new(),
                did: None,
                bfont: String::new(),
                bsize: 0,
            }],
            flds: vec![ModelField::new("Question", 0), ModelField::new("Answer", 1)],
            css: DEFAULT_CSS.to_string(),
            latex_pre: LATEX_PRE.to_string(),
            latex_post: LATEX_POST.to_string(),
            latexsvg: false,
            req: vec![(0, "any".to_string(), vec![0])],
            tags: Vec::new(),
            vers: Vec::new(),
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.flds.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A deck entry in the `decks` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub id: i64,
    pub name: String,
    pub desc: String,
    #[serde(rename = "mod")]
    pub modified: i64,
    pub usn: i32,
    pub collapsed: bool,
    pub conf: i64,
    #[serde(rename = "dyn")]
    pub dynamic: u8,
    pub extend_new: u32,
    pub extend_rev: u32,
    pub new_today: [i64; 2],
    pub rev_today: [i64; 2],
    pub lrn_today: [i64; 2],
    pub time_today: [i64; 2],
}

impl DeckEntry {
    pub fn new(id: i64, name: impl Into<String>, modified: i64) -> Self {
        Self {
            id,
            name: name.into(),
            desc: String::new(),
            modified,
            usn: -1,
            collapsed: false,
            conf: DEFAULT_DECK_ID,
            dynamic: 0,
            extend_new: 10,
            extend_rev: 50,
            new_today: [0, 0],
            rev_today: [0, 0],
            lrn_today: [0, 0],
            time_today: [0, 0],
        }
    }
}

/// `models` column: note types keyed by id.
pub fn models_json(models: &[NoteModel]) -> serde_json::Result<String> {
    let keyed: BTreeMap<String, &NoteModel> =
        models.iter().map(|m| (m.id.to_string(), m)).collect();
    serde_json::to_string(&keyed)
}

/// `decks` column: the Default deck plus the given decks, keyed by id.
pub fn decks_json(decks: &[DeckEntry], modified: i64) -> serde_json::Result<String> {
    let default = DeckEntry::new(DEFAULT_DECK_ID, "Default", modified);
    let keyed: BTreeMap<String, &DeckEntry> = std::iter::once(&default)
        .chain(decks.iter())
        .map(|d| (d.id.to_string(), d))
        .collect();
    serde_json::to_string(&keyed)
}

/// `conf` column: collection-wide settings.
pub fn collection_conf(current_model: i64, current_deck: i64) -> Value {
    json!({
        "activeDecks": [current_deck],
        "addToCur": true,
        "collapseTime": 1200,
        "curDeck": current_deck,
        "curModel": current_model.to_string(),
        "dueCounts": true,
        "estTimes": true,
        "newBury": true,
        "newSpread": 0,
        "nextPos": 1,
        "sortBackwards": false,
        "sortType": "noteFld",
        "timeLim": 0
    })
}

/// `dconf` column: the default deck options group.
pub fn deck_options() -> Value {
    json!({
        "1": {
            "autoplay": true,
            "id": DEFAULT_DECK_ID,
            "lapse": {
                "delays": [10],
                "leechAction": 0,
                "leechFails": 8,
                "minInt": 1,
                "mult": 0
            },
            "maxTaken": 60,
            "mod": 0,
            "name": "Default",
            "new": {
                "bury": true,
                "delays": [1, 10],
                "initialFactor": 2500,
                "ints": [1, 4, 7],
                "order": 1,
                "perDay": 20,
                "separate": true
            },
            "replayq": true,
            "rev": {
                "bury": true,
                "ease4": 1.3,
                "fuzz": 0.05,
                "ivlFct": 1,
                "maxIvl": 36500,
                "minSpace": 1,
                "perDay": 100
            },
            "timer": 0,
            "usn": 0
        }
    })
}
