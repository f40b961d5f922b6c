//! 内置指纹目录
//! 编译期固化的技术指纹常量表与分类优先级表，运行期只读共享，无任何加载/变更接口

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::model::SignatureEntry;

/// 未登记分类的兜底优先级，排在所有显式分类之后
pub const DEFAULT_CATEGORY_PRIORITY: u32 = 99;

/// 分类优先级表（数值越小优先级越高）
/// 业务关键分类排前，供检测结果排序与目录索引使用
const CATEGORY_PRIORITY_TABLE: &[(&str, u32)] = &[
    ("CRM", 1),
    ("Marketing Automation", 2),
    ("Email Marketing", 3),
    ("Chat", 4),
    ("Analytics", 5),
    ("Advertising", 6),
    ("Ecommerce", 7),
    ("A/B Testing", 8),
    ("CMS", 9),
    ("Forms", 10),
    ("Scheduling", 11),
    ("CDN", 12),
    ("Hosting", 13),
    ("Framework", 14),
];

static CATEGORY_PRIORITY: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| CATEGORY_PRIORITY_TABLE.iter().copied().collect());

/// 查询分类优先级，未登记分类返回兜底值
pub fn category_priority(category: &str) -> u32 {
    CATEGORY_PRIORITY
        .get(category)
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_PRIORITY)
}

// 指纹名称索引（name -> 目录项），目录内name唯一
static SIGNATURE_BY_NAME: Lazy<HashMap<&'static str, &'static SignatureEntry>> =
    Lazy::new(|| TECH_SIGNATURES.iter().map(|entry| (entry.name, entry)).collect());

/// 按名称查询指纹目录项（O(1)期望复杂度）
pub fn signature_by_name(name: &str) -> Option<&'static SignatureEntry> {
    SIGNATURE_BY_NAME.get(name).copied()
}

const fn sig(
    name: &'static str,
    category: &'static str,
    content_patterns: &'static [&'static str],
    header_patterns: &'static [&'static str],
) -> SignatureEntry {
    SignatureEntry {
        name,
        category,
        content_patterns,
        header_patterns,
    }
}

/// 技术指纹目录
/// 目录顺序决定匹配扫描顺序，不影响最终排序结果
pub static TECH_SIGNATURES: &[SignatureEntry] = &[
    // ============== CRM ==============
    sig(
        "HubSpot",
        "CRM",
        &[
            r"js\.hsforms\.net",
            r"js\.hs-scripts\.com",
            r"js\.hs-analytics\.net",
            r"js\.hubspot\.com",
            r"hbspt\.forms\.create",
            r"_hsp\s*=",
            r"hubspot",
        ],
        &["x-hs-hub-id"],
    ),
    sig(
        "Salesforce",
        "CRM",
        &[
            r"salesforce\.com",
            r"force\.com",
            r"salesforceliveagent\.com",
            r"sfdc\.com",
        ],
        &[],
    ),
    sig(
        "Pipedrive",
        "CRM",
        &[
            r"pipedrive\.com",
            r"leadbooster-chat\.pipedrive",
            r"pipedriveWebForms",
        ],
        &[],
    ),
    sig(
        "Zoho CRM",
        "CRM",
        &[
            r"zoho\.com/crm",
            r"salesiq\.zoho",
            r"zohocrm",
            r"zohopublic\.com",
        ],
        &[],
    ),
    sig(
        "Freshsales",
        "CRM",
        &[
            r"freshsales\.io",
            r"freshworks\.com",
            r"myfreshworks\.com",
        ],
        &[],
    ),
    sig(
        "Copper",
        "CRM",
        &[r"copper\.com", r"prosperworks\.com"],
        &[],
    ),
    // ============== Analytics ==============
    sig(
        "Google Analytics",
        "Analytics",
        &[
            r"google-analytics\.com/analytics",
            r"googletagmanager\.com/gtag",
            r#"gtag\s*\(\s*['"]config['"]"#,
            r"UA-\d{4,10}-\d{1,4}",
            r"G-[A-Z0-9]{10,}",
            r#"ga\s*\(\s*['"]create['"]"#,
            r"GoogleAnalyticsObject",
        ],
        &[],
    ),
    sig(
        "Google Tag Manager",
        "Analytics",
        &[
            r"googletagmanager\.com/gtm\.js",
            r"GTM-[A-Z0-9]{6,}",
            r"dataLayer\.push",
        ],
        &[],
    ),
    sig(
        "Hotjar",
        "Analytics",
        &[
            r"static\.hotjar\.com",
            r"hotjar\.com",
            r"_hjSettings",
            r"_hjid",
        ],
        &[],
    ),
    sig(
        "Mixpanel",
        "Analytics",
        &[
            r"mixpanel\.com",
            r"cdn\.mxpnl\.com",
            r"mixpanel\.init",
        ],
        &[],
    ),
    sig(
        "Amplitude",
        "Analytics",
        &[
            r"amplitude\.com",
            r"cdn\.amplitude\.com",
            r"amplitude\.getInstance",
        ],
        &[],
    ),
    sig(
        "Segment",
        "Analytics",
        &[
            r"cdn\.segment\.com",
            r"segment\.com/analytics",
            r"analytics\.load",
            r"analytics\.track",
        ],
        &[],
    ),
    sig(
        "Heap",
        "Analytics",
        &[r"heap\.io", r"heapanalytics\.com", r"heap\.load"],
        &[],
    ),
    sig(
        "Plausible",
        "Analytics",
        &[r"plausible\.io", r"plausible\.js"],
        &[],
    ),
    sig(
        "Fathom",
        "Analytics",
        &[r"usefathom\.com", r"cdn\.usefathom\.com"],
        &[],
    ),
    sig(
        "PostHog",
        "Analytics",
        &[
            r"posthog\.com",
            r"app\.posthog\.com",
            r"posthog\.init",
        ],
        &[],
    ),
    sig(
        "FullStory",
        "Analytics",
        &[r"fullstory\.com", r"fs\.com", r"FullStory\.init"],
        &[],
    ),
    sig(
        "Lucky Orange",
        "Analytics",
        &[r"luckyorange\.com", r"d10lpsik1i8c69\.cloudfront\.net"],
        &[],
    ),
    sig(
        "Clarity",
        "Analytics",
        &[r"clarity\.ms", r"microsoft\.com/clarity"],
        &[],
    ),
    // ============== Chat/Support ==============
    sig(
        "Intercom",
        "Chat",
        &[
            r"widget\.intercom\.io",
            r"intercom\.com",
            r"intercomSettings",
            r"Intercom\s*\(",
        ],
        &[],
    ),
    sig(
        "Zendesk",
        "Chat",
        &[
            r"zdassets\.com",
            r"zendesk\.com",
            r"ze-snippet",
            r"zESettings",
        ],
        &[],
    ),
    sig(
        "Drift",
        "Chat",
        &[r"js\.driftt\.com", r"drift\.com", r"drift\.load"],
        &[],
    ),
    sig(
        "Crisp",
        "Chat",
        &[
            r"client\.crisp\.chat",
            r"crisp\.chat",
            r"\$crisp",
            r"CRISP_WEBSITE_ID",
        ],
        &[],
    ),
    sig(
        "Tidio",
        "Chat",
        &[r"tidio\.co", r"code\.tidio\.co", r"tidioChatCode"],
        &[],
    ),
    sig(
        "LiveChat",
        "Chat",
        &[
            r"livechatinc\.com",
            r"cdn\.livechatinc\.com",
            r"__lc\s*=",
        ],
        &[],
    ),
    sig(
        "Tawk.to",
        "Chat",
        &[r"tawk\.to", r"embed\.tawk\.to", r"Tawk_API"],
        &[],
    ),
    sig(
        "Freshdesk",
        "Chat",
        &[
            r"freshdesk\.com",
            r"widget\.freshworks\.com",
            r"FreshworksWidget",
        ],
        &[],
    ),
    sig(
        "HelpScout",
        "Chat",
        &[
            r"beacon-v2\.helpscout\.net",
            r"helpscout\.net",
            r"Beacon\s*\(",
        ],
        &[],
    ),
    sig(
        "Olark",
        "Chat",
        &[
            r"olark\.com",
            r"static\.olark\.com",
            r"olark\.identify",
        ],
        &[],
    ),
    // ============== Email Marketing ==============
    sig(
        "Mailchimp",
        "Email Marketing",
        &[
            r"mailchimp\.com",
            r"list-manage\.com",
            r"chimpstatic\.com",
            r"mc\.us\d+\.list-manage",
        ],
        &[],
    ),
    sig(
        "Klaviyo",
        "Email Marketing",
        &[
            r"static\.klaviyo\.com",
            r"klaviyo\.com",
            r"_learnq",
        ],
        &[],
    ),
    sig(
        "SendGrid",
        "Email Marketing",
        &[r"sendgrid\.com", r"sendgrid\.net"],
        &[],
    ),
    sig(
        "Constant Contact",
        "Email Marketing",
        &[r"constantcontact\.com", r"ctctcdn\.com"],
        &[],
    ),
    sig(
        "ConvertKit",
        "Email Marketing",
        &[
            r"convertkit\.com",
            r"convertkit-mail",
            r"ck\.page",
        ],
        &[],
    ),
    sig(
        "ActiveCampaign",
        "Email Marketing",
        &[
            r"activecampaign\.com",
            r"trackcmp\.net",
            r"activehosted\.com",
        ],
        &[],
    ),
    sig(
        "Drip",
        "Email Marketing",
        &[r"getdrip\.com", r"drip\.com", r"_dcq"],
        &[],
    ),
    sig(
        "AWeber",
        "Email Marketing",
        &[r"aweber\.com", r"forms\.aweber\.com"],
        &[],
    ),
    sig(
        "GetResponse",
        "Email Marketing",
        &[r"getresponse\.com", r"gr8\.com"],
        &[],
    ),
    sig(
        "Sendinblue",
        "Email Marketing",
        &[
            r"sendinblue\.com",
            r"sibautomation\.com",
            r"brevo\.com",
        ],
        &[],
    ),
    // ============== Marketing Automation ==============
    sig(
        "Marketo",
        "Marketing Automation",
        &[
            r"marketo\.com",
            r"mktoresp\.com",
            r"marketo\.net",
            r"munchkin",
        ],
        &[],
    ),
    sig(
        "Pardot",
        "Marketing Automation",
        &[
            r"pardot\.com",
            r"pi\.pardot\.com",
            r"go\.pardot\.com",
        ],
        &[],
    ),
    sig(
        "Eloqua",
        "Marketing Automation",
        &[r"eloqua\.com", r"elqcfg", r"elqtrack"],
        &[],
    ),
    sig(
        "HubSpot Marketing",
        "Marketing Automation",
        &[
            r"hbspt\.forms",
            r"hs-scripts\.com",
            r"forms\.hubspot\.com",
        ],
        &[],
    ),
    // ============== E-commerce ==============
    sig(
        "Shopify",
        "Ecommerce",
        &[
            r"cdn\.shopify\.com",
            r"myshopify\.com",
            r"Shopify\.theme",
            r"shopify-checkout",
            r"/cart\.js",
        ],
        &["x-shopify-stage"],
    ),
    sig(
        "WooCommerce",
        "Ecommerce",
        &[
            r"woocommerce",
            r"wc-ajax",
            r"wp-content.*woocommerce",
            r"wc_add_to_cart",
        ],
        &[],
    ),
    sig(
        "BigCommerce",
        "Ecommerce",
        &[
            r"bigcommerce\.com",
            r"cdn\d+\.bigcommerce\.com",
            r"bigcommerce/",
        ],
        &[],
    ),
    sig(
        "Magento",
        "Ecommerce",
        &[
            r"magento",
            r"mage/",
            r"Mage\.Cookies",
            r"static/version",
        ],
        &["x-magento-"],
    ),
    sig(
        "PrestaShop",
        "Ecommerce",
        &[r"prestashop", r"presta", r"/modules/ps_"],
        &[],
    ),
    sig(
        "Squarespace Commerce",
        "Ecommerce",
        &[
            r"squarespace.*commerce",
            r"static\d*\.squarespace\.com.*commerce",
        ],
        &[],
    ),
    sig(
        "Stripe",
        "Ecommerce",
        &[r"js\.stripe\.com", r"stripe\.com", r"Stripe\s*\("],
        &[],
    ),
    sig(
        "PayPal",
        "Ecommerce",
        &[
            r"paypal\.com/sdk",
            r"paypalobjects\.com",
            r"paypal-button",
        ],
        &[],
    ),
    // ============== CMS ==============
    sig(
        "WordPress",
        "CMS",
        &[
            r"wp-content",
            r"wp-includes",
            r"wp-json",
            r"<meta[^>]*generator[^>]*WordPress",
            r"wordpress\.org",
        ],
        &["x-powered-by: wordpress"],
    ),
    sig(
        "Webflow",
        "CMS",
        &[
            r"webflow\.com",
            r"assets\.website-files\.com",
            r"<meta[^>]*generator[^>]*Webflow",
            r"wf-page",
        ],
        &[],
    ),
    sig(
        "Wix",
        "CMS",
        &[
            r"wix\.com",
            r"wixstatic\.com",
            r"parastorage\.com",
            r"static\.wixstatic\.com",
        ],
        &["x-wix-"],
    ),
    sig(
        "Squarespace",
        "CMS",
        &[
            r"squarespace\.com",
            r"static\d*\.squarespace\.com",
            r"squarespace-cdn\.com",
        ],
        &[],
    ),
    sig(
        "Drupal",
        "CMS",
        &[
            r"drupal",
            r"<meta[^>]*generator[^>]*Drupal",
            r"sites/default/files",
            r"Drupal\.settings",
        ],
        &["x-generator: drupal", "x-drupal-"],
    ),
    sig(
        "Joomla",
        "CMS",
        &[
            r"joomla",
            r"<meta[^>]*generator[^>]*Joomla",
            r"/media/jui/",
            r"/components/com_",
        ],
        &[],
    ),
    sig(
        "Ghost",
        "CMS",
        &[
            r"ghost\.io",
            r"ghost\.org",
            r"<meta[^>]*generator[^>]*Ghost",
        ],
        &["x-ghost-"],
    ),
    sig(
        "Contentful",
        "CMS",
        &[
            r"contentful\.com",
            r"ctfassets\.net",
            r"images\.ctfassets\.net",
        ],
        &[],
    ),
    sig(
        "Sanity",
        "CMS",
        &[r"sanity\.io", r"cdn\.sanity\.io"],
        &[],
    ),
    sig(
        "Framer",
        "CMS",
        &[
            r"framer\.com",
            r"framerusercontent\.com",
            r"framer-motion",
        ],
        &[],
    ),
    // ============== Advertising ==============
    sig(
        "Google Ads",
        "Advertising",
        &[
            r"googleads\.g\.doubleclick\.net",
            r"googleadservices\.com",
            r"googlesyndication\.com",
            r"adsbygoogle",
            r"AW-\d+",
        ],
        &[],
    ),
    sig(
        "Facebook Pixel",
        "Advertising",
        &[
            r"connect\.facebook\.net",
            r"fbevents\.js",
            r"fbq\s*\(",
            r"facebook\.com/tr",
        ],
        &[],
    ),
    sig(
        "LinkedIn Insight",
        "Advertising",
        &[
            r"snap\.licdn\.com",
            r"linkedin\.com/insight",
            r"_linkedin_partner_id",
        ],
        &[],
    ),
    sig(
        "Twitter Pixel",
        "Advertising",
        &[
            r"static\.ads-twitter\.com",
            r"analytics\.twitter\.com",
            r"twq\s*\(",
        ],
        &[],
    ),
    sig(
        "TikTok Pixel",
        "Advertising",
        &[
            r"analytics\.tiktok\.com",
            r"tiktok\.com/i18n/pixel",
            r"ttq\.load",
        ],
        &[],
    ),
    sig(
        "Pinterest Tag",
        "Advertising",
        &[
            r"pintrk",
            r"pinterest\.com/ct\.html",
            r"s\.pinimg\.com",
        ],
        &[],
    ),
    sig(
        "Reddit Pixel",
        "Advertising",
        &[
            r"redditmedia\.com",
            r"reddit\.com/pixel",
            r"rdt\s*\(",
        ],
        &[],
    ),
    sig(
        "Bing Ads",
        "Advertising",
        &[r"bat\.bing\.com", r"UET"],
        &[],
    ),
    sig(
        "Snapchat Pixel",
        "Advertising",
        &[r"sc-static\.net/scevent", r"snapkit\.com"],
        &[],
    ),
    // ============== A/B Testing ==============
    sig(
        "Optimizely",
        "A/B Testing",
        &[
            r"optimizely\.com",
            r"cdn\.optimizely\.com",
            r"optimizelySdk",
        ],
        &[],
    ),
    sig(
        "VWO",
        "A/B Testing",
        &[
            r"vwo\.com",
            r"visualwebsiteoptimizer\.com",
            r"_vwo",
        ],
        &[],
    ),
    sig(
        "Google Optimize",
        "A/B Testing",
        &[r"optimize\.google\.com", r"googleoptimize\.com"],
        &[],
    ),
    sig(
        "AB Tasty",
        "A/B Testing",
        &[r"abtasty\.com", r"try\.abtasty\.com"],
        &[],
    ),
    sig(
        "LaunchDarkly",
        "A/B Testing",
        &[r"launchdarkly\.com", r"clientsdk\.launchdarkly"],
        &[],
    ),
    // ============== Forms/Surveys ==============
    sig(
        "Typeform",
        "Forms",
        &[r"typeform\.com", r"embed\.typeform\.com"],
        &[],
    ),
    sig(
        "JotForm",
        "Forms",
        &[r"jotform\.com", r"cdn\.jotfor\.ms"],
        &[],
    ),
    sig(
        "SurveyMonkey",
        "Forms",
        &[r"surveymonkey\.com", r"widget\.surveymonkey\.com"],
        &[],
    ),
    sig(
        "Google Forms",
        "Forms",
        &[r"docs\.google\.com/forms"],
        &[],
    ),
    // ============== Scheduling ==============
    sig(
        "Calendly",
        "Scheduling",
        &[r"calendly\.com", r"assets\.calendly\.com"],
        &[],
    ),
    sig(
        "Acuity Scheduling",
        "Scheduling",
        &[r"acuityscheduling\.com", r"squareup\.com/appointments"],
        &[],
    ),
    sig(
        "Cal.com",
        "Scheduling",
        &[r"cal\.com", r"app\.cal\.com"],
        &[],
    ),
    // ============== CDN/Hosting ==============
    sig(
        "Cloudflare",
        "CDN",
        &[
            r"cdnjs\.cloudflare\.com",
            r"__cf_bm",
            r"cloudflare",
        ],
        &["cf-ray", "cf-cache-status", "server: cloudflare"],
    ),
    sig(
        "Fastly",
        "CDN",
        &[r"fastly\.net"],
        &["x-served-by", "x-cache: hit", "fastly"],
    ),
    sig(
        "Akamai",
        "CDN",
        &[r"akamai", r"akamaized\.net"],
        &["x-akamai-"],
    ),
    sig(
        "AWS CloudFront",
        "CDN",
        &[r"cloudfront\.net"],
        &["x-amz-cf-"],
    ),
    sig(
        "Vercel",
        "Hosting",
        &[r"vercel\.app", r"vercel\.com", r"now\.sh"],
        &["x-vercel-"],
    ),
    sig(
        "Netlify",
        "Hosting",
        &[r"netlify\.app", r"netlify\.com"],
        &["x-nf-"],
    ),
    // ============== Frameworks ==============
    sig(
        "React",
        "Framework",
        &[
            r"react",
            r"__REACT_DEVTOOLS",
            r"reactroot",
            r"data-reactroot",
        ],
        &[],
    ),
    sig(
        "Next.js",
        "Framework",
        &[r"_next/static", r"__NEXT_DATA__", r"next\.js"],
        &["x-nextjs-"],
    ),
    sig(
        "Vue.js",
        "Framework",
        &[
            r"vue\.js",
            r"vue\.min\.js",
            r"__vue__",
            r"data-v-",
        ],
        &[],
    ),
    sig(
        "Nuxt.js",
        "Framework",
        &[r"_nuxt/", r"__NUXT__"],
        &[],
    ),
    sig(
        "Angular",
        "Framework",
        &[
            r"ng-version",
            r"angular\.js",
            r"ng-app",
            r"ng-controller",
        ],
        &[],
    ),
    sig(
        "Svelte",
        "Framework",
        &[r"svelte", r"__svelte"],
        &[],
    ),
    sig(
        "jQuery",
        "Framework",
        &[r"jquery", r"jQuery"],
        &[],
    ),
    sig(
        "Bootstrap",
        "Framework",
        &[
            r"bootstrap\.min\.css",
            r"bootstrap\.min\.js",
            r"cdn\.jsdelivr\.net.*bootstrap",
        ],
        &[],
    ),
    sig(
        "Tailwind CSS",
        "Framework",
        &[r"tailwindcss", r"tailwind\.css"],
        &[],
    ),
];
