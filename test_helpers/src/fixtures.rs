//! Sample configuration documents as deployed by a stock portal install.
//!
//! Both start with a generated banner and mix quoting styles freely.

/// `nginx_stage.yml` with every setting of the per-user nginx spawner.
pub const NGINX_STAGE_YML: &str = r##"#
# `nginx_stage.yml` (NginxStageConfig) generated at 2024-03-05T09:59:02Z by ondemand_config 0.3.0.
#

ondemand_version_path: '/opt/ood/VERSION'
ondemand_portal: null
ondemand_title: null
pun_custom_env:
   OOD_DASHBOARD_TITLE: "Open OnDemand"
   OOD_BRAND_BG_COLOR: "#53565a"
   OOD_BRAND_LINK_ACTIVE_BG_COLOR: "#fff"
pun_custom_env_declarations:
  - PATH
  - LD_LIBRARY_PATH
  - MANPATH
  - SCLS
  - X_SCLS
template_root: '/opt/ood/nginx_stage/templates'
proxy_user: 'apache'
nginx_bin: '/opt/ood/ondemand/root/usr/sbin/nginx'
nginx_signals:
  - 'stop'
  - 'quit'
  - 'reopen'
  - 'reload'
mime_types_path: '/opt/ood/ondemand/root/etc/nginx/mime.types'
passenger_root: '/opt/ood/ondemand/root/usr/share/ruby/vendor_ruby/phusion_passenger/locations.ini'
passenger_ruby: '/opt/ood/nginx_stage/bin/ruby'
passenger_nodejs: '/opt/ood/nginx_stage/bin/node'
passenger_python: '/opt/ood/nginx_stage/bin/python'
passenger_pool_idle_time: 300
passenger_options: {}
nginx_file_upload_max: '10737420000'
pun_config_path: '/var/lib/ondemand-nginx/config/puns/%{user}.conf'
pun_tmp_root: '/var/tmp/ondemand-nginx/%{user}'
pun_access_log_path: '/var/log/ondemand-nginx/%{user}/access.log'
pun_error_log_path: '/var/log/ondemand-nginx/%{user}/error.log'
pun_secret_key_base_path: '/var/lib/ondemand-nginx/config/puns/%{user}.secret_key_base.txt'
pun_log_format: '$remote_addr - $remote_user [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent" "$http_x_forwarded_for"'
pun_pid_path: '/var/run/ondemand-nginx/%{user}/passenger.pid'
pun_socket_path: '/var/run/ondemand-nginx/%{user}/passenger.sock'
pun_sendfile_root: '/'
pun_sendfile_uri: '/sendfile'
pun_app_configs:
  - env: 'dev'
    owner: '%{user}'
    name: '*'
  - env: 'usr'
    owner: '*'
    name: '*'
  - env: 'sys'
    owner: ''
    name: '*'
app_config_path:
  dev: '/var/lib/ondemand-nginx/config/apps/dev/%{owner}/%{name}.conf'
  usr: '/var/lib/ondemand-nginx/config/apps/usr/%{owner}/%{name}.conf'
  sys: '/var/lib/ondemand-nginx/config/apps/sys/%{name}.conf'
app_root:
  dev: '/var/www/ood/apps/dev/%{owner}/gateway/%{name}'
  usr: '/var/www/ood/apps/usr/%{owner}/gateway/%{name}'
  sys: '/var/www/ood/apps/sys/%{name}'
app_request_uri:
  dev: '/dev/%{name}'
  usr: '/usr/%{owner}/%{name}'
  sys: '/sys/%{name}'
app_request_regex:
  dev: '^/dev/(?<name>[-\w.]+)'
  usr: '^/usr/(?<owner>[\w]+)\/(?<name>[-\w.]+)'
  sys: '^/sys/(?<name>[-\w.]+)'
app_token:
  dev: 'dev/%{owner}/%{name}'
  usr: 'usr/%{owner}/%{name}'
  sys: 'sys/%{name}'
app_passenger_env:
  dev: 'development'
  usr: 'production'
  sys: 'production'
user_regex: '[\w@\.\-]+'
min_uid: 1000
disabled_shell: '/access/denied'
disable_bundle_user_config: true
"##;

/// `ood_portal.yml` including an LDAP-backed `dex` section.
pub const OOD_PORTAL_YML: &str = r##"#
# `ood_portal.yml` (OodPortalConfig) generated at 2024-03-05T09:59:02Z by ondemand_config 0.3.0.
#

listen_addr_port: 443
servername: 10.69.205.59
server_aliases: ['www.example.com', 'www.awjeezrick.com']
proxy_server: null
port: 8080
ssl: null
logroot: 'logs'
errorlog: 'error.log'
accesslog: 'access.log'
logformat: Apache combine format
use_rewrites: true
use_maintenance: true
maintenance_ip_allowlist: []
security_csp_frame_ancestors:
security_strict_transport: false
lua_root: '/opt/ood/mod_ood_proxy/lib'
lua_log_level: 'info'
user_map_match: '.*'
user_map_cmd: null
user_env: null
map_fail_uri: null
pun_stage_cmd: 'sudo /opt/ood/nginx_stage/sbin/nginx_stage'
auth:
  - 'AuthType openid-connect'
  - 'Require valid-user'
root_uri: '/pun/sys/dashboard'
analytics: null
public_uri: '/public'
public_root: '/var/www/ood/public'
logout_uri: '/logout'
logout_redirect: '/pun/sys/dashboard/logout'
host_regex: '[^/]+'
node_uri: null
rnode_uri: null
nginx_uri: '/nginx'
pun_uri: '/pun'
pun_socket_root: '/var/run/ondemand-nginx'
pun_max_retries: 5
pun_pre_hook_root_cmd: null
pun_pre_hook_exports: null
oidc_uri: null
oidc_discover_uri: null
oidc_discover_root: null
register_uri: null
register_root: null
oidc_provider_metadata_url: null
oidc_client_id: null
oidc_client_secret: null
oidc_remote_user_claim: preferred_username
oidc_scope: "openid profile email"
oidc_session_inactivity_timeout: 28800
oidc_session_max_duration: 28800
oidc_state_max_number_of_cookies: "10 true"
oidc_cookie_same_site: 'On'
oidc_settings: {}
dex_uri: /dex
dex:
  ssl: false
  http_port: 5551
  https_port: 5554
  tls_cert: null
  tls_key: null
  storage_file: /etc/ood/dex/dex.db
  grpc: null
  expiry: null
  client_id: null
  client_name: OnDemand
  client_secret: /etc/ood/dex/ondemand.secret
  client_redirect_uris: []
  connectors:
    - type: ldap
      id: ldap
      name: LDAP
      config:
        host: openldap.my_center.edu:636
        insecureSkipVerify: false
        bindDN: cn=admin,dc=example,dc=org
        bindPW: admin
        userSearch:
          baseDN: ou=People,dc=example,dc=org
          filter: "(objectClass=posixAccount)"
          username: uid
          idAttr: uid
          emailAttr: mail
          nameAttr: gecos
          preferredUsernameAttr: uid
        groupSearch:
          baseDN: ou=Groups,dc=example,dc=org
          filter: "(objectClass=posixGroup)"
          userMatchers:
            - userAttr: DN
              groupAttr: member
          nameAttr: cn
  frontend:
    theme: ondemand
    dir: /usr/share/ondemand-dex/web
"##;
