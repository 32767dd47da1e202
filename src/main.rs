use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use blue_margarita::api::{
    ApiClient, CategoryService, SortDirection, StockOperation, StockService,
};
use blue_margarita::auth::TokenAuth;
use blue_margarita::config::{Config, ConfigStore};
use blue_margarita::logging::init_tracing;
use blue_margarita::ui::forms::CategoryForm;
use blue_margarita::ui::list::categories::{CategoryListFilters, CategoryListSource, CategorySort};
use blue_margarita::ui::list::low_stock::{LowStockFilters, LowStockScreen, LowStockSort, LowStockSource};
use blue_margarita::ui::list::{
    FilterSet, ListController, ListPhase, ListSettings, ListState, SortColumn, SortSpec,
    PAGE_SIZE_OPTIONS,
};
use blue_margarita::ui::modal::StockUpdateModal;
use blue_margarita::ui::nav::Navigate;

#[derive(Parser)]
#[command(name = "bmctl")]
#[command(about = "Blue Margarita back-office client")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/blue-margarita/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override `auth.token`
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Product categories
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// Stock management
    #[command(subcommand)]
    Stock(StockCommand),
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Filtered, paginated listing
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Rows per page: 6, 12 or 24 (default from config)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<u32>,
        #[arg(long, value_enum, default_value = "name")]
        sort: CategorySortArg,
        #[arg(long)]
        desc: bool,
    },
    Get { id: i64 },
    /// Category with product and sales totals
    Details { id: i64 },
    /// Id/name pairs for select inputs
    Dropdown,
    Create { name: String },
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum StockCommand {
    /// Products at or below their low-stock threshold
    Low {
        #[arg(long)]
        name_or_code: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        material: Option<String>,
        #[arg(long)]
        min: Option<i32>,
        #[arg(long)]
        max: Option<i32>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Rows per page: 6, 12 or 24 (default from config)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<u32>,
        #[arg(long, value_enum, default_value = "stock")]
        sort: LowStockSortArg,
        #[arg(long)]
        desc: bool,
    },
    /// Adjust the stock of a low-stock product, looked up by code
    Update {
        code: String,
        #[arg(long, value_enum)]
        operation: OperationArg,
        #[arg(long)]
        quantity: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Inactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategorySortArg {
    Name,
    CreatedAt,
}

#[derive(Clone, Copy, ValueEnum)]
enum LowStockSortArg {
    Name,
    Code,
    Stock,
    MinStock,
}

#[derive(Clone, Copy, ValueEnum)]
enum OperationArg {
    Add,
    Remove,
    Set,
}

impl From<CategorySortArg> for CategorySort {
    fn from(arg: CategorySortArg) -> Self {
        match arg {
            CategorySortArg::Name => CategorySort::Name,
            CategorySortArg::CreatedAt => CategorySort::CreatedAt,
        }
    }
}

impl From<LowStockSortArg> for LowStockSort {
    fn from(arg: LowStockSortArg) -> Self {
        match arg {
            LowStockSortArg::Name => LowStockSort::Name,
            LowStockSortArg::Code => LowStockSort::Code,
            LowStockSortArg::Stock => LowStockSort::Stock,
            LowStockSortArg::MinStock => LowStockSort::MinStock,
        }
    }
}

impl From<OperationArg> for StockOperation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Add => StockOperation::Add,
            OperationArg::Remove => StockOperation::Remove,
            OperationArg::Set => StockOperation::Set,
        }
    }
}

fn direction(desc: bool) -> SortDirection {
    if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

/// Services and settings shared by every command.
struct Services {
    categories: CategoryService,
    stock: StockService,
    settings: ListSettings,
}

impl Services {
    fn list_settings(&self, page_size: Option<u32>) -> ListSettings {
        ListSettings {
            page_size: page_size.unwrap_or(self.settings.page_size),
            ..self.settings
        }
    }
}

fn parse_page_size(raw: &str) -> Result<u32, String> {
    let size: u32 = raw.parse().map_err(|_| format!("'{}' is not a number", raw))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);
    store.apply_overrides(cli.base_url.as_deref(), cli.token.as_deref());

    let config = store.get();
    config.validate()?;
    tracing::debug!(path = %store.path().display(), base_url = %config.api.base_url, "Config loaded");

    let auth = Arc::new(TokenAuth::from_config(&config.auth));
    let client = ApiClient::new(&config.api, auth)?;
    let svc = Services {
        categories: CategoryService::new(client.clone()),
        stock: StockService::new(client),
        settings: ListSettings::from(&config.lists),
    };

    match cli.command {
        Commands::Categories(command) => run_categories(&svc, command).await,
        Commands::Stock(command) => run_stock(&svc, command).await,
    }
}

async fn run_categories(svc: &Services, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List {
            name,
            status,
            page,
            page_size,
            sort,
            desc,
        } => {
            let filters = CategoryListFilters {
                name: name.unwrap_or_default(),
                status: match status {
                    Some(StatusArg::Active) => "true".to_string(),
                    Some(StatusArg::Inactive) => "false".to_string(),
                    None => String::new(),
                },
            };
            let controller = ListController::with_params(
                CategoryListSource::new(svc.categories.clone()),
                svc.list_settings(page_size),
                filters,
                SortSpec::new(sort.into(), direction(desc)),
                page,
            );
            controller.mount();
            let state = controller.settled().await;

            match state.phase() {
                ListPhase::Populated(listing) => {
                    for category in &listing.data {
                        let status = if category.is_active { "active" } else { "inactive" };
                        println!("{:>6}  {:<40} {}", category.category_id, category.name, status);
                    }
                    print_range(&state);
                }
                ListPhase::Empty { .. } => println!("No categories found."),
                ListPhase::Error { message } => bail!("{}", message),
                ListPhase::Loading => {}
            }
        }
        CategoryCommand::Get { id } => {
            let category = svc.categories.get_category(id).await?;
            println!("{}", serde_json::to_string_pretty(&category)?);
        }
        CategoryCommand::Details { id } => {
            let details = svc.categories.get_category_details(id).await?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        CategoryCommand::Dropdown => {
            for option in svc.categories.get_categories_for_dropdown().await? {
                println!("{:>6}  {}", option.id, option.name);
            }
        }
        CategoryCommand::Create { name } => {
            let mut form = CategoryForm::new();
            form.set_name(name);
            let Some(payload) = form.insert_payload() else {
                bail!("{}", field_errors(&form));
            };
            match svc.categories.create_category(&payload).await {
                Ok(category) => {
                    println!("Created category {} ({})", category.name, category.category_id)
                }
                Err(err) => {
                    tracing::debug!(kind = err.kind(), "Create category rejected: {}", err);
                    form.apply_service_error(&err);
                    match form.general_error() {
                        Some(message) => bail!("{}", message),
                        None => bail!("{}", field_errors(&form)),
                    }
                }
            }
        }
        CategoryCommand::Delete { id } => {
            svc.categories.delete_category(id).await?;
            println!("Deleted category {}", id);
        }
    }
    Ok(())
}

async fn run_stock(svc: &Services, command: StockCommand) -> Result<()> {
    match command {
        StockCommand::Low {
            name_or_code,
            category,
            material,
            min,
            max,
            page,
            page_size,
            sort,
            desc,
        } => {
            let filters = LowStockFilters {
                name_or_code: name_or_code.unwrap_or_default(),
                category_id: category.map(|id| id.to_string()).unwrap_or_default(),
                material_name: material.unwrap_or_default(),
                min_stock: min.map(|n| n.to_string()).unwrap_or_default(),
                max_stock: max.map(|n| n.to_string()).unwrap_or_default(),
            };
            let sort = SortSpec::new(sort.into(), direction(desc));
            let screen = low_stock_screen(svc, filters, sort, page, page_size);
            show_low_stock(screen).await
        }
        StockCommand::Update {
            code,
            operation,
            quantity,
        } => {
            let filters = LowStockFilters {
                name_or_code: code.clone(),
                ..Default::default()
            };
            let mut screen = low_stock_screen(svc, filters, SortSpec::default(), 0, None);
            screen.mount().await;
            let state = screen.controller.settled().await;
            if let Some(message) = state.error() {
                bail!("{}", message);
            }

            let product = state
                .data
                .iter()
                .flat_map(|listing| listing.data.iter())
                .find(|alert| alert.product_code.eq_ignore_ascii_case(&code))
                .cloned()
                .ok_or_else(|| anyhow!("No low-stock product with code '{}'", code))?;

            let mut modal = StockUpdateModal::new();
            modal.open(product);
            modal.set_operation(operation.into());
            modal.set_quantity(quantity);
            if !modal.can_submit() {
                bail!("Quantity must be a whole number (positive for add/remove)");
            }

            let controller = screen.controller.clone();
            let result = modal
                .submit(&svc.stock, |_| controller.refresh())
                .await;
            match result {
                Some(result) => println!(
                    "{}: {} -> {} ({:+})",
                    result.product_code, result.previous_stock, result.new_stock, result.change_amount
                ),
                None => bail!("{}", modal.state().error().unwrap_or("Stock update failed")),
            }

            let state = screen.controller.settled().await;
            if let Some(listing) = &state.data {
                println!("{} products still low on stock", listing.total_elements);
            }
            Ok(())
        }
    }
}

fn low_stock_screen(
    svc: &Services,
    filters: LowStockFilters,
    sort: SortSpec<LowStockSort>,
    page: u32,
    page_size: Option<u32>,
) -> LowStockScreen {
    let controller = ListController::with_params(
        LowStockSource::new(svc.stock.clone()),
        svc.list_settings(page_size),
        filters,
        sort,
        page,
    );
    let on_navigate: Navigate = Arc::new(|page: &str| tracing::debug!(page, "Navigation requested"));
    LowStockScreen::with_controller(controller, svc.categories.clone(), on_navigate)
}

async fn show_low_stock(mut screen: LowStockScreen) -> Result<()> {
    screen.mount().await;
    let state = screen.controller.settled().await;

    match state.phase() {
        ListPhase::Populated(listing) => {
            println!(
                "{:<12} {:<32} {:<16} {:>7} {:>5}",
                "CODE", "NAME", "CATEGORY", "STOCK", "MIN"
            );
            for alert in &listing.data {
                println!(
                    "{:<12} {:<32} {:<16} {:>7} {:>5}",
                    alert.product_code,
                    alert.product_name,
                    alert.category_name.as_deref().unwrap_or("-"),
                    alert.current_stock,
                    alert.low_stock_alert
                );
            }
            print_range(&state);
        }
        ListPhase::Empty { .. } => {
            if let Some(message) = screen.empty_message() {
                println!("{}", message);
            }
        }
        ListPhase::Error { message } => bail!("{}", message),
        ListPhase::Loading => {}
    }
    Ok(())
}

fn print_range<F: FilterSet, C: SortColumn, T>(state: &ListState<F, C, T>) {
    if let (Some(listing), Some((from, to))) = (&state.data, state.showing_range()) {
        println!(
            "Showing {} to {} of {} (page {} of {})",
            from,
            to,
            listing.total_elements,
            listing.current_page + 1,
            listing.total_pages
        );
    }
}

fn field_errors(form: &CategoryForm) -> String {
    form.errors()
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}
