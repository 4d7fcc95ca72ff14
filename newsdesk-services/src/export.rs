//! CSV export of a filtered result set
//!
//! A data-shape contract, not a UI concern: one row per article with
//! columns `title,link,published,sentiment,polarity`. Quoting follows
//! RFC 4180 (fields containing commas, quotes or newlines are quoted,
//! embedded quotes doubled).

use newsdesk_core::Article;

const HEADER: &str = "title,link,published,sentiment,polarity";

/// Render articles as a CSV document, header row included
pub fn to_csv(articles: &[Article]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for article in articles {
        let published = article
            .published_at
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();
        let (sentiment, polarity) = match article.sentiment {
            Some(s) => (s.label.as_str().to_string(), format!("{:.3}", s.score)),
            None => (String::new(), String::new()),
        };

        let row = [
            article.title_text(),
            article.link.as_str(),
            published.as_str(),
            sentiment.as_str(),
            polarity.as_str(),
        ];
        let encoded: Vec<String> = row.iter().map(|field| escape(field)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
