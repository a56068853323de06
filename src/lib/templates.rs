use crate::{
    config::{
        PORTAL_ABOUT, PORTAL_CONTACT, PORTAL_HOME, PORTAL_LOGO_IMAGE, PORTAL_LOGO_LINK,
        PORTAL_LOGOUT, PORTAL_PARTNERS, SPACER_IMAGE, SPONSOR_IMAGE, SPONSOR_LINK,
        TRACKING_IMAGE,
    },
    types::{Fragment, GroupId},
    utils::escape_attr,
};

/// Everything the page skeleton needs, already loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub group_id: Option<GroupId>,
    pub content: Fragment,
    pub banner: Option<Fragment>,
}

/// Hit-counting image URL. A missing group id leaves the parameter blank.
pub fn tracking_url(group_id: Option<GroupId>) -> String {
    let id = group_id.map(|id| id.to_string()).unwrap_or_default();
    format!("{TRACKING_IMAGE}?group_id={id}&type=1")
}

/// Optional banner block placed between the content and the footer.
pub fn banner_block(banner: Option<&Fragment>) -> String {
    banner
        .map(|banner| {
            format!(
                r#"<!-- banner -->
{banner}
<!-- end banner -->

"#
            )
        })
        .unwrap_or_default()
}

/// Render the full portal page. Pure: no I/O happens here.
///
/// The title goes in as given, like the fragments; only the tracking URL is
/// attribute-escaped.
pub fn render(page: &Page) -> String {
    let title = &page.title;
    let tracking = escape_attr(&tracking_url(page.group_id));
    let content = &page.content;
    let banner = banner_block(page.banner.as_ref());

    format!(
        r##"<HTML>
<HEAD>
<TITLE>{title}</TITLE>
</HEAD>

<BODY bgcolor=#FFFFFF topmargin="0" bottommargin="0" leftmargin="0" rightmargin="0" marginheight="0" marginwidth="0">

<!-- top strip -->
<TABLE width="100%" border=0 cellspacing=0 cellpadding=2 bgcolor="737b9c">
  <TR>
    <TD><SPAN class=maintitlebar>&nbsp;&nbsp;
      <A class=maintitlebar href="{PORTAL_HOME}"><B>Home</B></A> |
      <A class=maintitlebar href="{PORTAL_ABOUT}"><B>About</B></A> |
      <A class=maintitlebar href="{PORTAL_PARTNERS}"><B>Partners</B></A> |
      <A class=maintitlebar href="{PORTAL_CONTACT}"><B>Contact Us</B></A> |
      <A class=maintitlebar href="{PORTAL_LOGOUT}"><B>Logout</B></A></SPAN>
    </TD>
  </TR>
</TABLE>
<!-- end top strip -->

<!-- top title table -->
<TABLE width="100%" border=0 cellspacing=0 cellpadding=0 bgcolor="" valign="center">
  <TR valign="center" bgcolor="#eeeef8">
    <TD>
      <A href="{PORTAL_LOGO_LINK}">
      <IMG src="{tracking}" width="1" height="1" border="0">
      <IMG src="{PORTAL_LOGO_IMAGE}" width="143" height="70" border="0"></A>
    </TD>
    <TD width="99%"><!-- right of logo -->
      <A href="{SPONSOR_LINK}"><IMG src="{SPONSOR_IMAGE}" align="right" alt="VA Linux Systems" hspace="5" vspace="7" border=0 width="117" height="70"></A>
    </TD><!-- right of logo -->
  </TR>
  <TR><TD bgcolor="#543a48" colspan=2><IMG src="{SPACER_IMAGE}" height=2 vspace=0></TD></TR>
</TABLE>
<!-- end top title table -->

<!-- center table -->
<TABLE width="100%" border="0" cellspacing="0" cellpadding="10" bgcolor="#FFFFFF" align="center">
  <TR>
    <TD>
{content}
    </TD>
  </TR>
</TABLE>
<!-- end center table -->

{banner}<!-- footer table -->
<TABLE width="100%" border="0" cellspacing="0" cellpadding="2" bgcolor="737b9c">
  <TR>
    <TD align="center"><FONT color="#ffffff"><SPAN class="titlebar">
      All trademarks and copyrights on this page are properties of their respective owners.</SPAN></FONT>
    </TD>
  </TR>
</TABLE>
<!-- end footer table -->
</BODY>
</HTML>
"##
    )
}

#[cfg(test)]
mod tests;
