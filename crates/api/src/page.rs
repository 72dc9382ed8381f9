//! Server-side rendering of the index page.
//!
//! Provider text is untrusted and must be escaped before interpolation.
//! The refresh script builds DOM nodes through `textContent`, so the
//! client side needs no escaping of its own.

use quotd_types::{Quote, ResolveError};

const PAGE_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Random Quote</title>
<style>
body {
	margin: 0;
	min-height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	font-family: Georgia, 'Times New Roman', serif;
	background: #f4f1ea;
	color: #2d2a26;
}
main {
	max-width: 42rem;
	padding: 2rem;
	text-align: center;
}
blockquote {
	margin: 0;
	font-size: 1.6rem;
	line-height: 1.4;
	quotes: '\201C' '\201D';
}
blockquote::before { content: open-quote; }
blockquote::after { content: close-quote; }
.author { font-size: 1.1rem; font-style: italic; margin: 1rem 0 0.25rem; }
.source { font-size: 0.8rem; color: #8a857c; margin: 0; }
.error { color: #a33c3c; font-size: 1.1rem; }
button {
	margin-top: 2rem;
	padding: 0.6rem 1.4rem;
	font-size: 1rem;
	font-family: inherit;
	color: #f4f1ea;
	background: #2d2a26;
	border: none;
	border-radius: 0.3rem;
	cursor: pointer;
}
button:hover { background: #4a453e; }
</style>
</head>
<body>
<main>
<div id="quote-card">
<!--CONTENT-->
</div>
<button id="refresh-btn">New quote</button>
</main>
<script>
const card = document.getElementById('quote-card');
document.getElementById('refresh-btn').addEventListener('click', async () => {
	let nodes;
	try {
		const response = await fetch('/refresh');
		const data = await response.json();
		if (data.success) {
			const text = document.createElement('blockquote');
			text.textContent = data.quote;
			const author = document.createElement('p');
			author.className = 'author';
			author.textContent = '— ' + data.author;
			const source = document.createElement('p');
			source.className = 'source';
			source.textContent = data.source;
			nodes = [text, author, source];
		} else {
			const error = document.createElement('p');
			error.className = 'error';
			error.textContent = data.error;
			nodes = [error];
		}
	} catch (err) {
		const error = document.createElement('p');
		error.className = 'error';
		error.textContent = 'Request failed: ' + err;
		nodes = [error];
	}
	card.replaceChildren(...nodes);
});
</script>
</body>
</html>
"#;

/// Render the index page for either resolution outcome.
pub fn render_index(outcome: &Result<Quote, ResolveError>) -> String {
	let content = match outcome {
		Ok(quote) => format!(
			"<blockquote>{}</blockquote>\n<p class=\"author\">&mdash; {}</p>\n<p class=\"source\">{}</p>",
			escape_html(&quote.text),
			escape_html(&quote.author),
			escape_html(&quote.source),
		),
		Err(err) => format!("<p class=\"error\">{}</p>", escape_html(&err.to_string())),
	};

	PAGE_SHELL.replace("<!--CONTENT-->", &content)
}

fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
