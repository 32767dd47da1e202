//! Low-stock products screen.

use async_trait::async_trait;

use crate::api::{
    CategoryForDropdown, CategoryService, LowStockQuery, Paginated, ServiceError, StockAlert,
    StockService,
};
use crate::ui::nav::{Navigate, PAGE_DASHBOARD};

use super::controller::{ListController, ListSettings, ListSource};
use super::filters::FilterSet;
use super::sorting::SortColumn;
use super::state::{ListPhase, ListRequest};

/// Raw filter inputs of the low-stock screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LowStockFilters {
    pub name_or_code: String,
    /// Selected category id, empty for "All Categories".
    pub category_id: String,
    pub material_name: String,
    pub min_stock: String,
    pub max_stock: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowStockField {
    NameOrCode,
    Category,
    MaterialName,
    MinStock,
    MaxStock,
}

impl FilterSet for LowStockFilters {
    type Field = LowStockField;

    fn get(&self, field: LowStockField) -> &str {
        match field {
            LowStockField::NameOrCode => &self.name_or_code,
            LowStockField::Category => &self.category_id,
            LowStockField::MaterialName => &self.material_name,
            LowStockField::MinStock => &self.min_stock,
            LowStockField::MaxStock => &self.max_stock,
        }
    }

    fn set(&mut self, field: LowStockField, value: String) {
        let slot = match field {
            LowStockField::NameOrCode => &mut self.name_or_code,
            LowStockField::Category => &mut self.category_id,
            LowStockField::MaterialName => &mut self.material_name,
            LowStockField::MinStock => &mut self.min_stock,
            LowStockField::MaxStock => &mut self.max_stock,
        };
        *slot = value;
    }

    fn is_debounced(field: LowStockField) -> bool {
        matches!(field, LowStockField::NameOrCode | LowStockField::MaterialName)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LowStockSort {
    Name,
    Code,
    #[default]
    Stock,
    MinStock,
}

impl LowStockSort {
    pub const ALL: [LowStockSort; 4] = [
        LowStockSort::Name,
        LowStockSort::Code,
        LowStockSort::Stock,
        LowStockSort::MinStock,
    ];

    pub fn header(self) -> &'static str {
        match self {
            LowStockSort::Name => "Product Name",
            LowStockSort::Code => "Code",
            LowStockSort::Stock => "Current Stock",
            LowStockSort::MinStock => "Min Stock",
        }
    }
}

impl SortColumn for LowStockSort {
    fn as_param(self) -> &'static str {
        match self {
            LowStockSort::Name => "name",
            LowStockSort::Code => "code",
            LowStockSort::Stock => "stock",
            LowStockSort::MinStock => "minStock",
        }
    }
}

/// Build the wire query for one fetch. Only active products are listed.
pub fn low_stock_query(request: &ListRequest<LowStockFilters, LowStockSort>) -> LowStockQuery {
    let filters = &request.filters;
    LowStockQuery {
        name_or_code: Some(filters.name_or_code.clone()),
        category_id: parse_number(&filters.category_id),
        material_name: Some(filters.material_name.clone()),
        min_stock: parse_number(&filters.min_stock),
        max_stock: parse_number(&filters.max_stock),
        page: Some(request.page),
        page_size: Some(request.page_size),
        sort_by: Some(request.sort.field.as_param().to_string()),
        sort_direction: Some(request.sort.direction),
        is_active: Some(true),
    }
}

fn parse_number<N: std::str::FromStr>(raw: &str) -> Option<N> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!("Ignoring non-numeric filter value '{}'", trimmed);
            None
        }
    }
}

/// Low-stock listing backed by the stock service.
pub struct LowStockSource {
    stock: StockService,
}

impl LowStockSource {
    pub fn new(stock: StockService) -> Self {
        Self { stock }
    }
}

#[async_trait]
impl ListSource for LowStockSource {
    type Filters = LowStockFilters;
    type Sort = LowStockSort;
    type Item = StockAlert;

    fn label(&self) -> &'static str {
        "low stock products"
    }

    async fn fetch(
        &self,
        request: ListRequest<LowStockFilters, LowStockSort>,
    ) -> Result<Paginated<StockAlert>, ServiceError> {
        self.stock.get_low_stock_products(&low_stock_query(&request)).await
    }
}

/// The low-stock products page: list controller plus the category
/// options for its filter select.
pub struct LowStockScreen {
    pub controller: ListController<LowStockSource>,
    categories: CategoryService,
    category_options: Vec<CategoryForDropdown>,
    on_navigate: Navigate,
}

impl LowStockScreen {
    pub fn new(
        stock: StockService,
        categories: CategoryService,
        settings: ListSettings,
        on_navigate: Navigate,
    ) -> Self {
        let controller = ListController::new(LowStockSource::new(stock), settings);
        Self::with_controller(controller, categories, on_navigate)
    }

    /// Screen around an existing controller, e.g. one opened on preset
    /// filters.
    pub fn with_controller(
        controller: ListController<LowStockSource>,
        categories: CategoryService,
        on_navigate: Navigate,
    ) -> Self {
        Self {
            controller,
            categories,
            category_options: Vec::new(),
            on_navigate,
        }
    }

    /// Load the category options once, then start the first fetch.
    ///
    /// A failed option load is logged and leaves the select with only
    /// "All Categories"; it does not affect the list itself.
    pub async fn mount(&mut self) {
        match self.categories.get_categories_for_dropdown().await {
            Ok(options) => self.category_options = options,
            Err(err) => tracing::error!(kind = err.kind(), "Failed to load categories: {}", err),
        }
        self.controller.mount();
    }

    pub fn category_options(&self) -> &[CategoryForDropdown] {
        &self.category_options
    }

    pub fn back_to_dashboard(&self) {
        (self.on_navigate)(PAGE_DASHBOARD);
    }

    /// Text shown when the listing comes back empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.controller.state().phase() {
            ListPhase::Empty { filtered: true } => {
                Some("Try adjusting your filters or clearing them to see more products.")
            }
            ListPhase::Empty { filtered: false } => Some("All products are adequately stocked!"),
            _ => None,
        }
    }
}
