//! Static document boilerplate around the table

use std::borrow::Cow;

/// Opening tag of the rendered table
pub const TABLE_OPEN_TAG: &str =
    r#"<table cellpadding="0" cellspacing="0" border="0" class="dbsources">"#;

/// Stylesheet of the standalone document
pub const DEFAULT_STYLE: &str = "body {
font-family: 'Lucida Grande', Verdana, Geneva, Lucida, Helvetica, Arial, sans-serif;
color: #333333;
}
table {
border-left: 1px solid #333!important;
border-right:1px solid #333;
border-bottom:1px solid #333
}
table {
width: 96%;
margin-left: 2%;
margin-right: 2%;
margin-top: 2%;
margin-bottom: 2%;
}
td, th {
padding: 6px 6px 6px 12px;
border-right: 1px solid #333;
border-bottom: 1px solid #333;
font-size: 12px;
}
th {
padding: 6px 6px 6px 12px;
text-align: left;
font-weight: bold;
border-right: 1px solid #FFFFFF!important;
color: white;
background-color: #000;
}
tr.new-category-row td {
border-top: 1px solid #333}
td.leftcol {
border-left:1px solid #333}
td.last-child {
border-right:1px solid #333}
";

/// Text written before and after the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    pub top: Cow<'static, str>,
    pub bottom: Cow<'static, str>,
}

impl DocumentTemplate {
    /// Complete HTML page with the given title and the default stylesheet
    pub fn standalone(title: &str) -> Self {
        DocumentTemplate {
            top: Cow::Owned(format!(
                "<html><head>\n<title>{}</title>\n<style>\n{}</style></head>\n<body>\n\n",
                title, DEFAULT_STYLE
            )),
            bottom: Cow::Borrowed("</body>\n</html>"),
        }
    }

    /// Table markup only, for embedding into an existing page
    pub fn fragment() -> Self {
        DocumentTemplate {
            top: Cow::Borrowed(""),
            bottom: Cow::Borrowed(""),
        }
    }
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::standalone("Data Categories Table")
    }
}
