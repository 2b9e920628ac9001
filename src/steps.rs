//! The built-in regression scenario.
//!
//! A fixed ordered table of interactions against the local app builder:
//! open the sign-in page, log in, create a project, then repeat the
//! project-creation flow a second time. Locators are absolute XPaths taken
//! from the deployed page structure; descriptions are what shows up in the
//! console output and the report.

use crate::runner::types::Step;

/// Login email for the test account
pub const LOGIN_EMAIL: &str = "salma.ky109@gmail.com";

/// Login password for the test account
pub const LOGIN_PASSWORD: &str = "Lina123@";

/// Project name entered in the creation form
pub const PROJECT_NAME: &str = "TESTPROJECT";

/// The literal ordered step sequence of the regression run
pub fn builtin_steps() -> Vec<Step> {
    vec![
        Step::click("Click first link", "/html/body/div[2]/div[3]/div/div/div[4]/a[2]"),
        Step::click(
            "Click second link",
            "/html/body/div[2]/div[3]/div/div/div[1]/div[2]/div[3]/a",
        ),
        Step::fill("Fill email", "//*[@id=\"email\"]", LOGIN_EMAIL),
        Step::fill("Fill password", "//*[@id=\"password\"]", LOGIN_PASSWORD),
        Step::click(
            "Click login button",
            "/html/body/div[2]/div[3]/div/div/div[1]/div[2]/div[1]/button",
        ),
        Step::click("Click next link", "/html/body/div[2]/div[7]/main/div[1]/div/a"),
        Step::fill("Fill app name", "//*[@id=\"app-name\"]", PROJECT_NAME),
        Step::click("Click third button", "/html/body/div[2]/div[1]/div[2]/button[3]"),
        Step::click("Click first button", "/html/body/div[2]/div[1]/div[2]/button[1]"),
        Step::click("Click next link", "/html/body/div[2]/div[7]/main/div[1]/div/a"),
        Step::fill("Fill app name", "//*[@id=\"app-name\"]", PROJECT_NAME),
        Step::click("Click third button", "/html/body/div[2]/div[1]/div[2]/button[3]"),
        Step::click("Click first button", "/html/body/div[2]/div[1]/div[2]/button[1]"),
    ]
}
