mod component;
mod quickstart;

pub use component::{
    AlertConditionPayload, AlertConditionType, DashboardPayload, DashboardScreenshot,
    DocumentationPayload, QuickstartComponent, UnrecognizedComponent,
};
pub use quickstart::{Author, IconRef, InstallPlan, QuickstartMetadata, QuickstartRecord};
