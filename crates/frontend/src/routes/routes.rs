use crate::domain::{
    a001_product::list::ProductListPage, a002_category::list::CategoryListPage,
    a003_brand::list::BrandListPage, a004_department::list::DepartmentListPage,
    a005_banner::list::BannerListPage, a006_customer::list::CustomerListPage,
};
use crate::layout::Shell;
use leptos::prelude::*;

/// Admin sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Products,
    Categories,
    Brands,
    Departments,
    Banners,
    Customers,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Products,
        Section::Categories,
        Section::Brands,
        Section::Departments,
        Section::Banners,
        Section::Customers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Products => "Products",
            Section::Categories => "Categories",
            Section::Brands => "Brands",
            Section::Departments => "Departments",
            Section::Banners => "Banners",
            Section::Customers => "Customers",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Categories => "categories",
            Section::Brands => "brands",
            Section::Departments => "departments",
            Section::Banners => "banners",
            Section::Customers => "customers",
        }
    }
}

/// Navigation state shared between the sidebar and the content area.
#[derive(Clone, Copy)]
pub struct NavState {
    pub active: RwSignal<Section>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Products),
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = NavState::new();
    provide_context(nav);

    // Pages are remounted on section switch, so each visit refetches.
    let content = move || match nav.active.get() {
        Section::Products => view! { <ProductListPage /> }.into_any(),
        Section::Categories => view! { <CategoryListPage /> }.into_any(),
        Section::Brands => view! { <BrandListPage /> }.into_any(),
        Section::Departments => view! { <DepartmentListPage /> }.into_any(),
        Section::Banners => view! { <BannerListPage /> }.into_any(),
        Section::Customers => view! { <CustomerListPage /> }.into_any(),
    };

    view! {
        <Shell>
            {content}
        </Shell>
    }
}
