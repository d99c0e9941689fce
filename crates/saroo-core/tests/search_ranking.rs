// Integration tests for search and ranking over a decoded Data Dragon roster.

use std::collections::HashSet;

use saroo_core::champion::Champion;
use saroo_core::ddragon;
use saroo_core::roster::Roster;
use saroo_core::search::{self, MatchTier, SearchIndex};

const KO_KR: &str = include_str!("fixtures/champion_ko_KR.json");
const EN_US: &str = include_str!("fixtures/champion_en_US.json");

fn fixture_roster() -> Roster {
    let champions = ddragon::decode_champions(
        KO_KR,
        Some(EN_US),
        Some(&ddragon::image_base("https://ddragon.leagueoflegends.com/cdn", "14.1.1")),
        "ko_KR",
    )
    .expect("fixture should decode");
    Roster::from_champions(champions)
}

fn ranked_ids(roster: &Roster, query: &str) -> Vec<String> {
    search::rank(roster, query, &HashSet::new(), None)
        .iter()
        .map(|c| c.champion.id.clone())
        .collect()
}

fn champ(id: &str, name_ko: &str) -> Champion {
    Champion::new(id, "0", id, name_ko, "")
}

#[test]
fn fixture_roster_is_collated_by_korean_name() {
    let roster = fixture_roster();
    assert_eq!(roster.len(), 27);
    let names: Vec<&str> = roster.iter().map(|c| c.name_ko.as_str()).collect();
    assert_eq!(&names[..5], &["가렌", "갈리오", "그레이브즈", "다리우스", "드레이븐"]);
    assert_eq!(&names[names.len() - 3..], &["케이틀린", "케일", "트위치"]);
}

#[test]
fn fixture_fields_are_merged() {
    let roster = fixture_roster();
    let mf = roster.get("MissFortune").unwrap();
    assert_eq!(mf.name, "Miss Fortune");
    assert_eq!(mf.name_ko, "미스 포츈");
    assert_eq!(mf.key, "21");
    assert_eq!(
        mf.image,
        "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/champion/MissFortune.png"
    );
}

#[test]
fn initials_lookup_excludes_different_initials() {
    let roster = Roster::from_champions(vec![champ("Lucian", "루시안"), champ("Leona", "레오나")]);
    let result = search::rank(&roster, "ㄹㅅㅇ", &HashSet::new(), None);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].champion.name_ko, "루시안");
    assert_eq!(result[0].tier, MatchTier::InitialsPrefix);
}

#[test]
fn full_initials_outrank_contained_initials() {
    let roster = Roster::from_champions(vec![champ("Orakan", "오라칸"), champ("Rakan", "라칸")]);
    let result = search::rank(&roster, "ㄹㅋ", &HashSet::new(), None);
    let ids: Vec<&str> = result.iter().map(|c| c.champion.id.as_str()).collect();
    assert_eq!(ids, vec!["Rakan", "Orakan"]);
    assert_eq!(result[0].tier, MatchTier::InitialsPrefix);
    assert_eq!(result[1].tier, MatchTier::InitialsContains);
}

#[test]
fn single_consonant_lists_initial_owners_in_order() {
    let roster = fixture_roster();
    assert_eq!(ranked_ids(&roster, "ㄱ"), vec!["Garen", "Galio", "Graves"]);
}

#[test]
fn initials_skip_spaces_in_names() {
    let roster = fixture_roster();
    assert_eq!(ranked_ids(&roster, "ㅁㅅㅍ"), vec!["MissFortune"]);
    // 럭스, 루시안 and 리 신 all start with ㄹㅅ; 리 신's space is ignored.
    assert_eq!(ranked_ids(&roster, "ㄹㅅ")[..3], ["Lux", "Lucian", "LeeSin"]);
}

#[test]
fn romanized_name_with_space() {
    let roster = fixture_roster();
    assert_eq!(ranked_ids(&roster, "Miss F"), vec!["MissFortune"]);
    assert_eq!(ranked_ids(&roster, "LEE"), vec!["LeeSin"]);
}

#[test]
fn used_and_active_annotations_on_fixture() {
    let roster = fixture_roster();
    let used: HashSet<String> = ["Garen".to_string()].into_iter().collect();
    let result = search::rank(&roster, "ㄱ", &used, Some("Graves"));
    let garen = result.iter().find(|c| c.champion.id == "Garen").unwrap();
    let graves = result.iter().find(|c| c.champion.id == "Graves").unwrap();
    assert!(!garen.selectable);
    assert!(!garen.is_active);
    assert!(graves.selectable);
    assert!(graves.is_active);
}

#[test]
fn every_result_contains_the_query_and_every_exclusion_does_not() {
    let roster = fixture_roster();
    let index = SearchIndex::new(roster.clone());

    let mut queries: Vec<String> = vec![
        "a".into(),
        "ㅇ".into(),
        "ㅅㅅ".into(),
        "ㄹ ㅇ".into(),
        "리".into(),
        "ra".into(),
        "스".into(),
        "qqq".into(),
    ];
    // Every two-character window of every localized name.
    for c in roster.iter() {
        let chars: Vec<char> = c.name_ko.chars().collect();
        for w in chars.windows(2) {
            queries.push(w.iter().collect());
        }
    }

    for raw in &queries {
        let q = search::normalize(raw);
        let result = index.rank(raw, &HashSet::new(), None);
        let included: HashSet<&str> = result.iter().map(|c| c.champion.id.as_str()).collect();

        for champion in roster.iter() {
            let fields = [
                search::normalize(&champion.name),
                search::normalize(&champion.name_ko),
                search::normalize(&champion.id),
                search::normalize(&search::initials(&champion.name_ko)),
            ];
            let contains = q.is_empty() || fields.iter().any(|f| f.contains(&q));
            assert_eq!(
                included.contains(champion.id.as_str()),
                contains,
                "query {raw:?}, champion {}",
                champion.id
            );
        }

        // Tiers never decrease along the result.
        for pair in result.windows(2) {
            assert!(pair[0].tier <= pair[1].tier, "query {raw:?}");
        }
    }
}
