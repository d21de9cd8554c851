// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ContactDraft, DomainError, HeroPhraseDraft, NamedDraft, NewsDraft, TopicDraft,
    canonical_interview_date, normalize_optional_text, normalize_required_text,
    validate_contact_draft, validate_hero_phrase_draft, validate_image_extension,
    validate_named_draft, validate_news_draft, validate_topic_draft, validate_unique_names,
};

#[test]
fn test_normalize_required_text_trims() {
    let result: Result<String, DomainError> = normalize_required_text("name", "  sample1 ");
    assert_eq!(result, Ok(String::from("sample1")));
}

#[test]
fn test_normalize_required_text_rejects_whitespace_only() {
    let result: Result<String, DomainError> = normalize_required_text("text", " \t\n ");
    assert_eq!(result, Err(DomainError::EmptyField { field: "text" }));
}

#[test]
fn test_normalize_optional_text_blanks_to_none() {
    assert_eq!(normalize_optional_text(Some("   ")), None);
    assert_eq!(normalize_optional_text(None), None);
    assert_eq!(
        normalize_optional_text(Some(" sub ")),
        Some(String::from("sub"))
    );
}

#[test]
fn test_validate_unique_names_accepts_distinct() {
    assert!(validate_unique_names(["sample1", "sample2", "x"]).is_ok());
}

#[test]
fn test_validate_unique_names_is_case_sensitive() {
    assert!(validate_unique_names(["Tag", "tag"]).is_ok());
}

#[test]
fn test_validate_unique_names_reports_first_duplicate() {
    let result: Result<(), DomainError> = validate_unique_names(["a", "b", "a", "b"]);
    assert_eq!(
        result,
        Err(DomainError::DuplicateName {
            name: String::from("a")
        })
    );
}

#[test]
fn test_canonical_interview_date() {
    assert_eq!(
        canonical_interview_date(" 2024-05-01 "),
        Ok(String::from("2024-05-01"))
    );
    assert!(matches!(
        canonical_interview_date("2024-02-30"),
        Err(DomainError::InvalidDate { .. })
    ));
    assert!(matches!(
        canonical_interview_date("May 1st"),
        Err(DomainError::InvalidDate { .. })
    ));
}

#[test]
fn test_validate_topic_draft_requires_title_and_body() {
    let draft: TopicDraft = TopicDraft {
        title: String::from("  "),
        body: String::from("body"),
        ..TopicDraft::default()
    };
    assert_eq!(
        validate_topic_draft(draft),
        Err(DomainError::EmptyField { field: "title" })
    );

    let draft: TopicDraft = TopicDraft {
        title: String::from("Title"),
        body: String::new(),
        ..TopicDraft::default()
    };
    assert_eq!(
        validate_topic_draft(draft),
        Err(DomainError::EmptyField { field: "body" })
    );
}

#[test]
fn test_validate_topic_draft_normalizes_optional_fields_and_tags() {
    let draft: TopicDraft = TopicDraft {
        title: String::from(" Signal Core "),
        excerpt: Some(String::from("  ")),
        body: String::from("Body"),
        link1_title: Some(String::from(" Site ")),
        link1_url: Some(String::from("https://example.com")),
        tag_ids: vec![2, 1, 2],
        ..TopicDraft::default()
    };

    let normalized: TopicDraft = validate_topic_draft(draft).unwrap();
    assert_eq!(normalized.title, "Signal Core");
    assert_eq!(normalized.excerpt, None);
    assert_eq!(normalized.link1_title.as_deref(), Some("Site"));
    assert_eq!(normalized.link2_url, None);
    assert_eq!(normalized.tag_ids, vec![2, 1]);
}

#[test]
fn test_validate_hero_phrase_draft() {
    let draft: HeroPhraseDraft = HeroPhraseDraft {
        text: String::from(" web開発 "),
        is_published: true,
        sort_order: 3,
    };
    let normalized: HeroPhraseDraft = validate_hero_phrase_draft(draft).unwrap();
    assert_eq!(normalized.text, "web開発");
    assert!(normalized.is_published);
    assert_eq!(normalized.sort_order, 3);

    let blank: HeroPhraseDraft = HeroPhraseDraft {
        text: String::new(),
        is_published: false,
        sort_order: 0,
    };
    assert_eq!(
        validate_hero_phrase_draft(blank),
        Err(DomainError::EmptyField { field: "text" })
    );
}

#[test]
fn test_validate_named_draft_rejects_taken_name() {
    let draft: NamedDraft = NamedDraft {
        name: String::from(" sample1 "),
        sort_order: 0,
    };
    let result: Result<NamedDraft, DomainError> =
        validate_named_draft(draft, ["sample1", "sample2"]);
    assert_eq!(
        result,
        Err(DomainError::DuplicateName {
            name: String::from("sample1")
        })
    );
}

#[test]
fn test_validate_named_draft_accepts_new_name() {
    let draft: NamedDraft = NamedDraft {
        name: String::from("sample3"),
        sort_order: 2,
    };
    let result: NamedDraft = validate_named_draft(draft, ["sample1"]).unwrap();
    assert_eq!(result.name, "sample3");
    assert_eq!(result.sort_order, 2);
}

#[test]
fn test_validate_news_draft() {
    let draft: NewsDraft = NewsDraft {
        title: String::from(" Interview "),
        subtitle: Some(String::from(" ")),
        url: String::from("https://example.com/a"),
        interview_date: String::from("2024-05-01"),
    };
    let normalized: NewsDraft = validate_news_draft(draft).unwrap();
    assert_eq!(normalized.title, "Interview");
    assert_eq!(normalized.subtitle, None);
    assert_eq!(normalized.interview_date, "2024-05-01");
}

#[test]
fn test_validate_news_draft_requires_url_and_date() {
    let draft: NewsDraft = NewsDraft {
        title: String::from("Interview"),
        subtitle: None,
        url: String::new(),
        interview_date: String::from("2024-05-01"),
    };
    assert_eq!(
        validate_news_draft(draft),
        Err(DomainError::EmptyField { field: "url" })
    );

    let draft: NewsDraft = NewsDraft {
        title: String::from("Interview"),
        subtitle: None,
        url: String::from("https://example.com"),
        interview_date: String::from("yesterday"),
    };
    assert!(matches!(
        validate_news_draft(draft),
        Err(DomainError::InvalidDate { .. })
    ));
}

#[test]
fn test_validate_contact_draft() {
    let draft: ContactDraft = ContactDraft {
        name: String::from("Hanako"),
        email: String::from("hanako@example.com"),
        phone_number: Some(String::new()),
        message: String::from(" Hello "),
    };
    let normalized: ContactDraft = validate_contact_draft(draft).unwrap();
    assert_eq!(normalized.phone_number, None);
    assert_eq!(normalized.message, "Hello");

    let missing: ContactDraft = ContactDraft {
        name: String::from("Hanako"),
        email: String::new(),
        phone_number: None,
        message: String::from("Hello"),
    };
    assert_eq!(
        validate_contact_draft(missing),
        Err(DomainError::EmptyField { field: "email" })
    );
}

#[test]
fn test_validate_image_extension() {
    assert_eq!(validate_image_extension("photo.JPG"), Ok(String::from(".jpg")));
    assert_eq!(validate_image_extension("a.b.jpeg"), Ok(String::from(".jpeg")));
    assert_eq!(validate_image_extension("shot.png"), Ok(String::from(".png")));
}

#[test]
fn test_validate_image_extension_rejects_heic_separately() {
    assert_eq!(
        validate_image_extension("IMG_0001.HEIC"),
        Err(DomainError::HeicNotSupported)
    );
    assert_eq!(
        validate_image_extension("IMG_0001.heif"),
        Err(DomainError::HeicNotSupported)
    );
}

#[test]
fn test_validate_image_extension_rejects_other_formats() {
    assert_eq!(
        validate_image_extension("anim.gif"),
        Err(DomainError::UnsupportedImageFormat {
            extension: String::from(".gif")
        })
    );
    assert_eq!(
        validate_image_extension("noextension"),
        Err(DomainError::UnsupportedImageFormat {
            extension: String::new()
        })
    );
}
