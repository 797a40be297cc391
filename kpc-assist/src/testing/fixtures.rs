//! Sample catalog fixtures.

use serde_json::json;

use crate::catalog::{
    AttributeContract, Catalog, CatalogSource, ComponentContract, ComponentSummary, EventContract,
    UsageExample,
};

/// Numeric input with a required `value`.
#[must_use]
pub fn spinner_contract() -> ComponentContract {
    ComponentContract::new("Spinner")
        .with_description("数字输入框，通过按钮或键盘增减数值")
        .with_category("表单组件")
        .with_tags(["数字", "输入", "计数器"])
        .with_attribute(AttributeContract::new("value", "number").required())
        .with_attribute(AttributeContract::new("min", "number"))
        .with_attribute(AttributeContract::new("max", "number"))
        .with_attribute(AttributeContract::new("step", "number").with_default(json!(1)))
        .with_attribute(AttributeContract::new("disabled", "boolean"))
        .with_event(EventContract::new("change"))
}

/// Text input.
#[must_use]
pub fn input_contract() -> ComponentContract {
    ComponentContract::new("Input")
        .with_description("文本输入框")
        .with_category("表单组件")
        .with_tags(["输入", "文本", "表单"])
        .with_attribute(AttributeContract::new("value", "string"))
        .with_attribute(AttributeContract::new("placeholder", "string"))
        .with_attribute(AttributeContract::new("disabled", "boolean"))
        .with_attribute(AttributeContract::new("clearable", "boolean"))
        .with_attribute(
            AttributeContract::new("size", "string")
                .with_default(json!("default"))
                .with_allowed_values(["large", "default", "small", "mini"]),
        )
        .with_event(EventContract::new("input"))
}

/// Button.
#[must_use]
pub fn button_contract() -> ComponentContract {
    ComponentContract::new("Button")
        .with_description("按钮，用于触发操作")
        .with_category("基础组件")
        .with_tags(["按钮", "点击"])
        .with_attribute(
            AttributeContract::new("type", "string")
                .with_allowed_values(["default", "primary", "warning", "danger"]),
        )
        .with_attribute(AttributeContract::new("disabled", "boolean"))
        .with_attribute(AttributeContract::new("loading", "boolean"))
        .with_event(EventContract::new("click"))
        .with_example(UsageExample::new("Primary", "<Button type=\"primary\">OK</Button>"))
}

/// Form container.
#[must_use]
pub fn form_contract() -> ComponentContract {
    ComponentContract::new("Form")
        .with_description("表单容器，负责校验与提交")
        .with_category("表单组件")
        .with_tags(["表单", "校验"])
        .with_attribute(AttributeContract::new("labelWidth", "string | number"))
        .with_attribute(AttributeContract::new("layout", "string"))
        .with_event(EventContract::new("submit"))
}

/// Form item wrapper.
#[must_use]
pub fn form_item_contract() -> ComponentContract {
    ComponentContract::new("FormItem")
        .with_description("表单项，包裹表单控件并提供校验")
        .with_category("表单组件")
        .with_tags(["表单", "校验"])
        .with_attribute(AttributeContract::new("label", "string"))
        .with_attribute(AttributeContract::new("value", "any"))
        .with_attribute(AttributeContract::new("rules", "object"))
}

/// Data table.
#[must_use]
pub fn table_contract() -> ComponentContract {
    ComponentContract::new("Table")
        .with_description("表格，用于展示结构化数据")
        .with_category("数据展示")
        .with_tags(["表格", "数据"])
        .with_attribute(AttributeContract::new("data", "array"))
        .with_attribute(AttributeContract::new("stripe", "boolean"))
        .with_attribute(AttributeContract::new("checkType", "string"))
        .with_attribute(
            AttributeContract::new("scheme", "object")
                .deprecated()
                .with_description("replaced by TableColumn"),
        )
}

/// The full sample catalog, in index order.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new([
        button_contract(),
        input_contract(),
        spinner_contract(),
        form_contract(),
        form_item_contract(),
        table_contract(),
        ComponentContract::new("TableColumn")
            .with_description("表格列定义")
            .with_category("数据展示")
            .with_tags(["表格", "列"])
            .with_attribute(AttributeContract::new("key", "string"))
            .with_attribute(AttributeContract::new("title", "string")),
        ComponentContract::new("Select")
            .with_description("下拉选择器")
            .with_category("表单组件")
            .with_tags(["选择", "下拉", "输入"])
            .with_attribute(AttributeContract::new("value", "string | number"))
            .with_attribute(AttributeContract::new("multiple", "boolean"))
            .with_attribute(AttributeContract::new("keywords", "array").deprecated()),
        ComponentContract::new("Tabs")
            .with_description("标签页容器")
            .with_category("导航组件")
            .with_tags(["标签页", "切换"]),
        ComponentContract::new("Tab")
            .with_description("单个标签页")
            .with_category("导航组件")
            .with_tags(["标签页"])
            .with_attribute(AttributeContract::new("value", "string").required()),
        ComponentContract::new("Checkbox")
            .with_description("复选框")
            .with_category("表单组件")
            .with_tags(["选择", "多选"])
            .with_attribute(AttributeContract::new("value", "boolean")),
    ])
}

/// Summaries of [`sample_catalog`], in index order.
#[must_use]
pub fn sample_summaries() -> Vec<ComponentSummary> {
    sample_catalog().list_summaries().to_vec()
}
