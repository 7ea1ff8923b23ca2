//! Static mood-tag catalog keyed by neighborhood name.
//!
//! Frequencies drive both the badge radius and its z-order. An unknown
//! neighborhood simply has no tags yet; callers get an empty list and
//! render an empty map, never an error.

/// A mood tag with its observed frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodTag {
    pub name: String,
    pub frequency: u32,
}

/// neighborhood → (tag name, frequency) pairs
const CATALOG: &[(&str, &[(&str, u32)])] = &[
    (
        "연남동",
        &[
            ("데이트", 5),
            ("혼밥", 4),
            ("가성비", 4),
            ("조용한", 3),
            ("감성적", 3),
            ("신선한", 2),
            ("든든한", 2),
        ],
    ),
    (
        "합정동",
        &[
            ("분위기 좋은", 5),
            ("활기찬", 4),
            ("신선한", 4),
            ("데이트", 3),
            ("빠른 식사", 3),
            ("특별한", 2),
            ("혼밥", 1),
        ],
    ),
    (
        "망원동",
        &[
            ("든든한", 5),
            ("가성비", 5),
            ("혼밥", 4),
            ("편안한", 3),
            ("조용한", 2),
            ("감성적", 2),
            ("빠른 식사", 1),
        ],
    ),
    (
        "청운효자동",
        &[("조용한", 4), ("산책", 3), ("한적한", 5), ("전통", 2)],
    ),
    (
        "사직동",
        &[("역사적인", 4), ("가족", 3), ("든든한", 5), ("숨은 맛집", 3)],
    ),
    (
        "삼청동",
        &[
            ("데이트", 5),
            ("감성적", 5),
            ("갤러리", 3),
            ("예쁜 카페", 4),
            ("조용한", 2),
        ],
    ),
    (
        "서교동",
        &[
            ("활기찬", 5),
            ("젊은", 4),
            ("술 한잔", 4),
            ("클럽", 3),
            ("버스킹", 2),
        ],
    ),
    (
        "익선동",
        &[
            ("한옥", 5),
            ("데이트", 5),
            ("골목길", 4),
            ("감성적", 4),
            ("전통주", 3),
        ],
    ),
    (
        "정자동",
        &[
            ("카페거리", 5),
            ("브런치", 4),
            ("가족 외식", 3),
            ("깔끔한", 4),
        ],
    ),
    (
        "판교동",
        &[
            ("테크노밸리", 5),
            ("점심", 4),
            ("회식", 3),
            ("깔끔한", 4),
            ("가성비", 2),
        ],
    ),
];

/// Mood tags recorded for `neighborhood`. Unknown names yield an empty list.
pub fn tags_for(neighborhood: &str) -> Vec<MoodTag> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == neighborhood)
        .map(|(_, tags)| {
            tags.iter()
                .map(|&(name, frequency)| MoodTag {
                    name: name.to_string(),
                    frequency,
                })
                .collect()
        })
        .unwrap_or_default()
}
