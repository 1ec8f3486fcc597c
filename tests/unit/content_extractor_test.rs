//! Readable content extraction and chunking over realistic page markup.

use accessibility_widget::services::content_extractor::{
    decode_entities, ContentExtractor, ContentExtractorTrait,
};
use accessibility_widget::services::text_chunker::chunk_blocks;

const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="ro">
<head><title>Știri</title><style>p { color: red; }</style></head>
<body>
  <nav><a href="/">Acasă</a></nav>
  <article>
    <h1>Vremea de mâine</h1>
    <p>Mâine va fi soare. Temperaturile cresc!</p>
    <p class="screen-reader-only">Text pentru cititoare de ecran.</p>
    <ul><li>Dimineața: 12 &deg;C</li><li>După-amiaza: 21&nbsp;°C</li></ul>
  </article>
  <div id="accessibility-widget" data-accessibility-widget>
    <h2>Accesibilitate</h2><p>Mărime text</p>
  </div>
  <noscript><p>Activați JavaScript.</p></noscript>
</body>
</html>"#;

#[test]
fn test_article_blocks_in_document_order() {
    let blocks = ContentExtractor::default().readable_blocks(ARTICLE);
    assert_eq!(
        blocks,
        vec![
            "Vremea de mâine",
            "Mâine va fi soare. Temperaturile cresc!",
            "Dimineața: 12 &deg;C",
            "După-amiaza: 21 °C",
        ]
    );
}

#[test]
fn test_custom_panel_id_is_excluded() {
    let html = r#"<p>Pagina</p><aside id="a11y"><p>Panou</p></aside>"#;
    let blocks = ContentExtractor::new("a11y").readable_blocks(html);
    assert_eq!(blocks, vec!["Pagina"]);
}

#[test]
fn test_blocks_end_sentences_for_chunking() {
    let blocks = ContentExtractor::default().readable_blocks(ARTICLE);
    let chunks = chunk_blocks(&blocks, 35);
    assert_eq!(
        chunks,
        vec![
            "Vremea de mâine Mâine va fi soare.",
            "Temperaturile cresc!",
            "Dimineața: 12 &deg;C",
            "După-amiaza: 21 °C",
        ]
    );
}

#[test]
fn test_numeric_entities() {
    assert_eq!(decode_entities("&#536;&#x21B; &lt;b&gt; &quot;x&quot; &apos;"), "Șț <b> \"x\" '");
}
