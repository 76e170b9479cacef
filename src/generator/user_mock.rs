//! User-mock scaffold generation
//!
//! A one-time, user-editable seed module that imports the generated
//! auto-mock and re-exports it unchanged. The caller must never overwrite an
//! existing scaffold; this renderer only produces the initial contents.

/// File stem of the generated auto-mock module the scaffold imports
pub const AUTO_MOCK_ID: &str = "_mock.auto";

/// Generate the initial user-mock scaffold
pub fn generate(mount_name: &str) -> String {
    format!(
        "// Customize the mock implementations here as needed.\n\
         import {{ autoMock }} from './{}';\n\
         \n\
         // Mutate the autoMock object, or replace it entirely.\n\
         // e.g.:\n\
         // autoMock.{}.someFunction = () => {{ ... }}\n\
         \n\
         export default autoMock;\n",
        AUTO_MOCK_ID, mount_name
    )
}
