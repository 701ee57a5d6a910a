use super::*;

fn page_url() -> Url {
    Url::parse("https://search.kyobobook.co.kr/search?keyword=%EC%B2%A0%ED%95%99").unwrap()
}

fn card(title: &str, description: &str, reviews: &str) -> String {
    format!(
        r#"<li class="prod_item">
             <div class="prod_thumb_box"><img src="//contents.kyobobook.co.kr/cover/1.jpg" alt=""></div>
             <a class="prod_info" href="https://product.kyobobook.co.kr/detail/S000001">
               <span class="prod_name">{title}</span>
             </a>
             <p class="prod_introduction">{description}</p>
             <span class="review_klover_text">{reviews}</span>
           </li>"#
    )
}

fn page(cards: &[String]) -> String {
    format!(
        r#"<html><body><div id="shopData_list"><ul class="prod_list">{}</ul></div></body></html>"#,
        cards.join("\n")
    )
}

#[test]
fn extracts_title_description_and_reviews() {
    let html = page(&[card("침묵의 사유", "  문장이\n 절제된   책 ", "(1,234)")]);
    let books = extract_books(&html, &page_url(), 10).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "침묵의 사유");
    assert_eq!(books[0].description, "문장이 절제된 책");
    assert_eq!(books[0].review_count, Some(1234));
    assert_eq!(books[0].score, None);
}

#[test]
fn resolves_link_and_protocol_relative_cover() {
    let html = page(&[card("책", "소개", "(3)")]);
    let books = extract_books(&html, &page_url(), 10).unwrap();
    assert_eq!(
        books[0].link.as_deref(),
        Some("https://product.kyobobook.co.kr/detail/S000001")
    );
    assert_eq!(
        books[0].cover_url.as_deref(),
        Some("https://contents.kyobobook.co.kr/cover/1.jpg")
    );
}

#[test]
fn caps_number_of_items() {
    let cards: Vec<String> = (0..15)
        .map(|i| card(&format!("책 {i}"), "소개", "(1)"))
        .collect();
    let books = extract_books(&page(&cards), &page_url(), 10).unwrap();
    assert_eq!(books.len(), 10);
    assert_eq!(books[0].title, "책 0");
    assert_eq!(books[9].title, "책 9");
}

#[test]
fn missing_fields_become_empty_or_none() {
    let html = page(&[r#"<li class="prod_item"><span class="prod_name">제목만</span></li>"#.to_string()]);
    let books = extract_books(&html, &page_url(), 10).unwrap();
    assert_eq!(books[0].title, "제목만");
    assert_eq!(books[0].description, "");
    assert_eq!(books[0].review_count, None);
    assert_eq!(books[0].link, None);
    assert_eq!(books[0].cover_url, None);
}

#[test]
fn empty_search_page_yields_no_books() {
    let html = r#"<html><body><div class="no_data">검색 결과가 없습니다</div></body></html>"#;
    let books = extract_books(html, &page_url(), 10).unwrap();
    assert!(books.is_empty());
}

#[test]
fn unrelated_page_is_a_parse_error() {
    let html = "<html><body><h1>점검 중입니다</h1></body></html>";
    let err = extract_books(html, &page_url(), 10).unwrap_err();
    assert!(matches!(err, ScraperError::Parse { .. }), "got {err:?}");
}

#[test]
fn javascript_links_are_dropped() {
    let html = page(&[r#"<li class="prod_item"><a href="javascript:void(0)"><span class="prod_name">책</span></a></li>"#.to_string()]);
    let books = extract_books(&html, &page_url(), 10).unwrap();
    assert_eq!(books[0].link, None);
}

#[test]
fn review_count_parses_comma_grouped_digits() {
    assert_eq!(parse_review_count("(1,234)"), Some(1234));
    assert_eq!(parse_review_count("리뷰 12건"), Some(12));
    assert_eq!(parse_review_count("0"), Some(0));
}

#[test]
fn review_count_without_digits_is_none() {
    assert_eq!(parse_review_count(""), None);
    assert_eq!(parse_review_count("리뷰 없음"), None);
}

#[test]
fn review_count_overflow_is_none() {
    assert_eq!(parse_review_count("99999999999999"), None);
}
