/// Skeleton `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# newsatlas settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # or // are comments; trailing ` # comment` is ignored.\n\
#\n\
# ---------- News API ----------\n\
# API key for newsapi.org. The NEWSATLAS_API_KEY environment variable and the\n\
# --api-key flag take precedence over this value.\n\
news_api_key =\n\
# Country code used for top headlines\n\
news_country = us\n\
# Number of articles per request (1-100)\n\
news_page_size = 9\n\
news_base_url = https://newsapi.org\n\
#\n\
# ---------- Country directory ----------\n\
countries_base_url = https://restcountries.com\n\
#\n\
# ---------- Behaviour ----------\n\
# Whole-request timeout in seconds\n\
http_timeout_secs = 20\n\
# What to do when an older news request finishes after a newer one:\n\
#   discard   = keep the newest result (default)\n\
#   last_wins = apply results in arrival order\n\
stale_results = discard\n\
# View shown on startup: news or countries\n\
start_view = news\n";
