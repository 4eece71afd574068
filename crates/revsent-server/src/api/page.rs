//! Base page markup. The prediction block is only present after a POST.

use axum::response::Html;
use revsent_sentiment::Prediction;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Review Sentiment</title>
</head>
<body>
  <main>
    <h1>Review Sentiment</h1>
    <form action="/predict" method="post">
      <label for="review">Write your review</label>
      <textarea id="review" name="review" rows="6" cols="60" required></textarea>
      <button type="submit">Predict</button>
    </form>
"#;

const TAIL: &str = r"  </main>
</body>
</html>
";

pub(super) fn render(prediction: Option<&Prediction>) -> Html<String> {
    let mut page = String::with_capacity(HEAD.len() + TAIL.len() + 256);
    page.push_str(HEAD);
    if let Some(prediction) = prediction {
        page.push_str("    <section class=\"result\">\n");
        page.push_str("      <p id=\"prediction\">");
        push_escaped(&mut page, prediction.label);
        page.push_str("</p>\n      <p id=\"custom_emoji\">");
        push_escaped(&mut page, prediction.emoji);
        page.push_str("</p>\n    </section>\n");
    }
    page.push_str(TAIL);
    Html(page)
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use revsent_sentiment::{fuse, Vote, NEGATIVE_LABEL};

    use super::*;

    #[test]
    fn base_page_has_no_prediction_block() {
        let Html(page) = render(None);
        assert!(page.contains("<form action=\"/predict\" method=\"post\">"));
        assert!(!page.contains("id=\"prediction\""));
        assert!(!page.contains("id=\"custom_emoji\""));
    }

    #[test]
    fn populated_page_contains_escaped_label_and_emoji() {
        let prediction = fuse(Vote::Negative, 0.0);
        let Html(page) = render(Some(&prediction));
        assert!(page.contains(NEGATIVE_LABEL));
        assert!(page.contains("<p id=\"custom_emoji\">😶</p>"));
    }

    #[test]
    fn push_escaped_neutralizes_markup() {
        let mut out = String::new();
        push_escaped(&mut out, "<b>\"Tom & Jerry's\"</b>");
        assert_eq!(
            out,
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }
}
