//! Template values for the viewer document.
//!
//! The skeleton and its inlined assets are plain data carried by
//! [`DocumentTemplate`]. Substitution placeholders use the `{{NAME}}` form;
//! `$uri` and `$lang` are *not* placeholders — they are nginx variables
//! resolved by the server per request and must survive into the output.

/// CDN root the script tags point at.
pub const CDN_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs";

/// Placeholder names understood by the assembler.
pub mod placeholder {
    pub const CSS: &str = "{{CSS}}";
    pub const JS: &str = "{{JS}}";
    pub const SCRIPTS: &str = "{{SCRIPTS}}";
    pub const STYLES: &str = "{{STYLES}}";
    pub const HIGHLIGHT_VERSION: &str = "{{HIGHLIGHT_VERSION}}";
}

/// One remote script inclusion: library name, resolved version, minified
/// entry file.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRef<'a> {
    pub library: &'a str,
    pub version: &'a str,
    pub file: &'a str,
}

impl ScriptRef<'_> {
    /// Render the `<script>` tag pointing at the catalog's hosting path.
    pub fn tag(&self) -> String {
        format!(
            "<script src=\"{}/{}/{}/{}\"></script>",
            CDN_BASE, self.library, self.version, self.file
        )
    }
}

/// The HTML/CSS/JS pieces the assembler fills in.
///
/// `Default` carries the shipped viewer. Callers may substitute their own
/// pieces, subject to the same literal guards at assembly time.
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    /// HTML skeleton with `{{…}}` placeholders.
    pub html: String,

    /// Minified stylesheet inlined into the skeleton.
    pub css: String,

    /// Minified client behaviour script. Runs after a `STYLES` array
    /// literal is defined in the same script block.
    pub js: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            html: SKELETON_HTML.to_string(),
            css: MINIFIED_CSS.to_string(),
            js: MINIFIED_JS.to_string(),
        }
    }
}

/// Viewer page skeleton. Double quotes only; the whole document ends up
/// inside a single-quoted nginx string literal.
const SKELETON_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="generator" content="nginx-source-viewer">
    <link id="css" rel="stylesheet">
    <style>{{CSS}}</style>
    <title>$uri</title>
</head>
<body class="hljs">
    {{SCRIPTS}}
    <script id="js" src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/{{HIGHLIGHT_VERSION}}/languages/$lang.min.js"></script>
    <script>const STYLES={{STYLES}};{{JS}}</script>
    <div>
        <a href="./" class="hljs-subst">Show directory.</a>&nbsp;&nbsp;|&nbsp;&nbsp;
        <a href="$uri?raw=1" class="hljs-subst">Get the raw file here.</a>&nbsp;&nbsp;|&nbsp;&nbsp;
        <a href="#" id="prvstyle" class="hljs-subst">&larr;</a>&nbsp;Style&nbsp;
        "<span id="style" style="text-transform: capitalize; display: inline-block; min-width: 20ch;"></span>"
        &nbsp;<a href="#" id="nxtstyle" class="hljs-subst">&rarr;</a>&nbsp;&nbsp;|&nbsp;&nbsp;
        <a href="#" id="wrap" class="hljs-subst">Toggle wrapping.</a>
    </div>
    <pre><code id="code" class="$lang"></code></pre>
</body>
</html>"##;

// Pre-minified assets. The readable sources live in docs/viewer-assets.md;
// re-minify there if either changes.
const MINIFIED_CSS: &str = "body,html,pre{min-height:100%}.hljs{font-family:\"Fira Code\",monospace!important}.wrap{\
white-space:pre-wrap;word-wrap:break-word}td.hljs-ln-code{padding-left:10px!important}td.hljs-ln-numbers{\
user-select:none;text-align:right;color:#ccc;border-right:1px solid #ccc;vertical-align:top;padding-right:5px!important}";

const MINIFIED_JS: &str = "const j=jQuery,ls=localStorage,RAW_URL=\"$uri?raw=1\";var gStyle=STYLES[0];function set_style(e){j(\"#css\").attr(\"href\",j(\"#js\").attr(\
\"src\").replace(/lang.+/,\"styles/\"+e+\".min.css\")),j(\"#style\").text(e.replace(/[-_]/g,\" \")),gStyle=e,ls.setItem(\"style\",\
e)}function move_style(e){let t=STYLES.indexOf(gStyle)+e;t<0&&(t+=STYLES.length),set_style(STYLES[t%STYLES.length])}function toggle_wrap(){let \
e=j(\"#code\"),t=0!=arguments.length?arguments[0]:!e.hasClass(\"wrap\");t?e.addClass(\"wrap\"):e.removeClass(\"wrap\"),ls.setItem(\"wrap\",\
t)}hljs.configure({tabReplace:\" \"}),j(function(){null!==ls.getItem(\"style\")?set_style(ls.getItem(\"style\")):set_style(gStyle),\
null!==ls.getItem(\"wrap\")&&toggle_wrap(ls.getItem(\"wrap\")),j.get({url:RAW_URL,dataType:\"text\"}).done(function(e){let t=j(\"#code\").text(e)[\
0];hljs.highlightBlock(t),hljs.lineNumbersBlock(t)}),j(\"#nxtstyle\").click(function(){move_style(1)}),j(\"#prvstyle\").click(function(){\
move_style(-1)}),j(\"#wrap\").click(function(){toggle_wrap()})});";
