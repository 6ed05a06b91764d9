mod logging;
mod progress;
