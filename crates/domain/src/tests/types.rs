// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ResourceKind, ResourcePolicy, TextRule};
use std::str::FromStr;

#[test]
fn test_resource_kind_round_trips_through_slug() {
    for kind in ResourceKind::ALL {
        let parsed: ResourceKind = ResourceKind::from_str(kind.as_str()).unwrap();
        assert_eq!(parsed, kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_resource_kind_rejects_unknown_slug() {
    let result: Result<ResourceKind, DomainError> = ResourceKind::from_str("operators");
    assert_eq!(
        result,
        Err(DomainError::UnknownResource(String::from("operators")))
    );
}

#[test]
fn test_categories_and_tags_require_unique_names() {
    for kind in [ResourceKind::Categories, ResourceKind::Tags] {
        let policy: ResourcePolicy = kind.policy();
        assert_eq!(policy.text_rule, TextRule::RequiredUnique);
        assert!(!policy.has_publish_flag);
        assert_eq!(kind.text_field(), Some("name"));
    }
}

#[test]
fn test_hero_phrases_require_text_and_carry_publish_flag() {
    let policy: ResourcePolicy = ResourceKind::HeroPhrases.policy();
    assert_eq!(policy.text_rule, TextRule::Required);
    assert!(policy.has_publish_flag);
    assert!(!policy.has_news_fields);
}

#[test]
fn test_topics_and_hero_images_have_no_bulk_text() {
    for kind in [ResourceKind::Topics, ResourceKind::HeroImages] {
        let policy: ResourcePolicy = kind.policy();
        assert_eq!(policy.text_rule, TextRule::None);
        assert!(policy.has_publish_flag);
        assert_eq!(kind.text_field(), None);
    }
}

#[test]
fn test_news_has_edit_columns_but_no_publish_flag() {
    let policy: ResourcePolicy = ResourceKind::News.policy();
    assert_eq!(policy.text_rule, TextRule::Required);
    assert!(!policy.has_publish_flag);
    assert!(policy.has_news_fields);
}
