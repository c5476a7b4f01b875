//! Verse corpus capability and the built-in catalog.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::CorpusError;
use crate::types::{Surah, Verse};

/// Read access to reference verses.
pub trait VerseSource: Send + Sync {
    /// Verses of one surah in stored order.
    fn verses_for(&self, surah: u32) -> Vec<Verse>;

    /// Verse by id.
    fn verse(&self, id: u32) -> Option<Verse>;

    /// Surah catalog.
    fn surahs(&self) -> Vec<Surah>;

    /// Verses of one surah limited to an inclusive ayah range. A bound of 0
    /// means unbounded.
    fn verses_in_range(&self, surah: u32, start: Option<u32>, end: Option<u32>) -> Vec<Verse> {
        let start = start.filter(|&s| s != 0);
        let end = end.filter(|&e| e != 0);
        self.verses_for(surah)
            .into_iter()
            .filter(|v| start.map_or(true, |s| v.ayah >= s))
            .filter(|v| end.map_or(true, |e| v.ayah <= e))
            .collect()
    }

    /// Verses whose Arabic text contains `query`, or whose transliteration
    /// or translation contains it case-insensitively.
    fn search(&self, query: &str) -> Vec<Verse>;
}

/// In-memory corpus, loaded once.
#[derive(Debug, Clone)]
pub struct StaticCorpus {
    surahs: Vec<Surah>,
    verses: Vec<Verse>,
}

#[derive(Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    surahs: Vec<Surah>,
    verses: Vec<Verse>,
}

impl StaticCorpus {
    pub fn new(surahs: Vec<Surah>, verses: Vec<Verse>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::new();
        for verse in &verses {
            if !seen.insert(verse.id) {
                return Err(CorpusError::DuplicateVerse { id: verse.id });
            }
        }
        Ok(Self { surahs, verses })
    }

    /// Parse a `{"surahs": [...], "verses": [...]}` document.
    pub fn from_json(content: &str) -> Result<Self, CorpusError> {
        let doc: CorpusDocument = serde_json::from_str(content)?;
        Self::new(doc.surahs, doc.verses)
    }

    /// The opening of Al-Fatihah and the starter surah catalog.
    pub fn builtin() -> Self {
        Self {
            surahs: vec![
                surah(1, "Al-Fatihah", "الفاتحة"),
                surah(2, "Al-Baqarah", "البقرة"),
                surah(3, "Ali 'Imran", "آل عمران"),
            ],
            verses: vec![
                Verse {
                    id: 1,
                    surah: 1,
                    ayah: 1,
                    text: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ".to_string(),
                    transliteration: "Bismillāhi r-raḥmāni r-raḥīm".to_string(),
                    translation: "In the name of Allah, the Entirely Merciful, the Especially Merciful.".to_string(),
                },
                Verse {
                    id: 2,
                    surah: 1,
                    ayah: 2,
                    text: "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ".to_string(),
                    transliteration: "Al-ḥamdu lillāhi rabbi l-ʿālamīn".to_string(),
                    translation: "All praise is due to Allah, Lord of the worlds.".to_string(),
                },
                Verse {
                    id: 3,
                    surah: 1,
                    ayah: 3,
                    text: "الرَّحْمَٰنِ الرَّحِيمِ".to_string(),
                    transliteration: "Ar-raḥmāni r-raḥīm".to_string(),
                    translation: "The Entirely Merciful, the Especially Merciful,".to_string(),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

impl Default for StaticCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

fn surah(number: u32, name: &str, arabic_name: &str) -> Surah {
    Surah {
        number,
        name: name.to_string(),
        arabic_name: arabic_name.to_string(),
    }
}

impl VerseSource for StaticCorpus {
    fn verses_for(&self, surah: u32) -> Vec<Verse> {
        self.verses
            .iter()
            .filter(|v| v.surah == surah)
            .cloned()
            .collect()
    }

    fn verse(&self, id: u32) -> Option<Verse> {
        self.verses.iter().find(|v| v.id == id).cloned()
    }

    fn surahs(&self) -> Vec<Surah> {
        self.surahs.clone()
    }

    fn search(&self, query: &str) -> Vec<Verse> {
        let latin_query = query.trim().to_lowercase();
        self.verses
            .iter()
            .filter(|v| {
                v.text.contains(query)
                    || v.transliteration.to_lowercase().contains(&latin_query)
                    || v.translation.to_lowercase().contains(&latin_query)
            })
            .cloned()
            .collect()
    }
}
