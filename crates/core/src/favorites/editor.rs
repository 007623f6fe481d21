use crate::favorites::page::FavoritesPage;
use crate::favorites::types::{ApplyOutcome, FavoritesError, Link, PageLayout};

/// High-level, text-in/text-out API over [`FavoritesPage`].
#[derive(Debug, Clone, Default)]
pub struct FavoritesEditor {
    layout: PageLayout,
}

impl FavoritesEditor {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Add a link to a group, creating the group if needed.
    ///
    /// # Arguments
    /// * `input` - The source page
    /// * `group` - Group heading text, matched exactly
    /// * `address` - Link target, taken verbatim
    /// * `name` - Text displayed for the link
    ///
    /// # Returns
    /// The modified page and whether the group was created
    ///
    /// # Errors
    /// * `Format` - Input is empty or whitespace-only
    /// * `NoBody` / `NoHolder` - The group is new and the page has nowhere to put it
    pub fn apply_new_link(
        &self,
        input: &str,
        group: &str,
        address: &str,
        name: &str,
    ) -> Result<ApplyOutcome, FavoritesError> {
        let mut page = FavoritesPage::parse(input, self.layout.clone())?;
        let (target, group_created) = page.ensure_group(group)?;
        page.insert_link(&target, &Link::new(address, name))?;

        Ok(ApplyOutcome { content: page.serialize(), group: target.name, group_created })
    }

    /// Heading text of every group in the page, in document order.
    pub fn list_groups(&self, input: &str) -> Result<Vec<String>, FavoritesError> {
        Ok(FavoritesPage::parse(input, self.layout.clone())?.list_groups())
    }
}

/// [`FavoritesEditor::apply_new_link`] with the default page layout.
pub fn apply_new_link(
    input: &str,
    group: &str,
    address: &str,
    name: &str,
) -> Result<ApplyOutcome, FavoritesError> {
    FavoritesEditor::default().apply_new_link(input, group, address, name)
}

/// [`FavoritesEditor::list_groups`] with the default page layout.
pub fn list_groups(input: &str) -> Result<Vec<String>, FavoritesError> {
    FavoritesEditor::default().list_groups(input)
}
